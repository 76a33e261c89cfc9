//! Authoritative board state and the placement protocol.

use crate::cell::Cell;
use crate::contracts::{Contract, PlacementContract};
use crate::error::PlacementError;
use crate::geometry::{Offset, to_offset};
use crate::types::{Piece, PlayerKind};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{info, instrument, warn};

/// Number of cells in the lattice.
pub(crate) const CAPACITY: usize = 27;

/// Result of a successful placement.
///
/// Carries everything a renderer needs to instantiate the piece mesh: the
/// owner (which picks the marker shape) and the world-space offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Getters)]
pub struct Placement {
    /// The piece just created.
    #[getter(copy)]
    piece: Piece,
    /// Where the renderer should put it.
    #[getter(copy)]
    offset: Offset,
}

/// Mutable game state for one session.
///
/// Holds the occupancy record and whose turn it is. The only mutating
/// operations are [`place_at`](Self::place_at) and [`reset`](Self::reset).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    pub(crate) occupied: BTreeMap<Cell, Piece>,
    pub(crate) current_player: PlayerKind,
    pub(crate) history: Vec<Piece>,
}

impl BoardState {
    /// Creates an empty board with [`PlayerKind::First`] to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            occupied: BTreeMap::new(),
            current_player: PlayerKind::First,
            history: Vec::new(),
        }
    }

    /// Places the current player's piece at `cell` and passes the turn.
    ///
    /// On success exactly one entry is added to the occupancy record and the
    /// turn flips. On failure nothing changes.
    ///
    /// # Errors
    ///
    /// Checked in order:
    /// 1. [`PlacementError::InvalidCell`] if `cell` is outside the lattice.
    /// 2. [`PlacementError::CellOccupied`] if `cell` already holds a piece.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn place_at(&mut self, cell: Cell) -> Result<Placement, PlacementError> {
        if let Err(e) = PlacementContract::pre(self, &cell) {
            warn!(%cell, error = %e, "Placement rejected");
            return Err(e);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let piece = Piece::new(cell, self.current_player);
        self.occupied.insert(cell, piece);
        self.history.push(piece);
        self.current_player = self.current_player.opponent();

        #[cfg(debug_assertions)]
        if let Err(e) = PlacementContract::post(&before, self) {
            warn!(%cell, error = %e, "Postcondition failed, rolling back");
            *self = before;
            return Err(e);
        }

        let offset = to_offset(cell);
        info!(
            %cell,
            owner = %piece.owner(),
            ?offset,
            next = %self.current_player,
            "Piece placed"
        );

        Ok(Placement { piece, offset })
    }

    /// Clears the board for a new session.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(pieces = self.occupied.len(), "Resetting board");
        *self = Self::new();
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> PlayerKind {
        self.current_player
    }

    /// Returns the occupancy record, ordered by cell.
    pub fn occupied(&self) -> &BTreeMap<Cell, Piece> {
        &self.occupied
    }

    /// Returns the piece at `cell`, if any.
    pub fn piece_at(&self, cell: Cell) -> Option<Piece> {
        self.occupied.get(&cell).copied()
    }

    /// Returns true if `cell` holds a piece.
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.occupied.contains_key(&cell)
    }

    /// Number of pieces on the board.
    pub fn len(&self) -> usize {
        self.occupied.len()
    }

    /// Returns true if no piece has been placed.
    pub fn is_empty(&self) -> bool {
        self.occupied.is_empty()
    }

    /// Returns true if all 27 cells are occupied.
    pub fn is_full(&self) -> bool {
        self.occupied.len() == CAPACITY
    }

    /// Cells still open, in [`Cell::ALL`] order.
    #[instrument(skip(self))]
    pub fn empty_cells(&self) -> Vec<Cell> {
        Cell::ALL
            .iter()
            .copied()
            .filter(|cell| !self.is_occupied(*cell))
            .collect()
    }

    /// Pieces in the order they were placed.
    pub fn history(&self) -> &[Piece] {
        &self.history
    }

    /// Owned, serializable copy of the read-only state.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            current_player: self.current_player,
            pieces: self.occupied.values().copied().collect(),
        }
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BoardState {
    /// Three layers, top first. Rows run back to front, columns left to right.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (n, layer) in Cell::ALL.chunks(9).enumerate() {
            let name = ["top", "middle", "bottom"][n];
            writeln!(f, "{}:", name)?;
            for row in layer.chunks(3) {
                let line: Vec<String> = row
                    .iter()
                    .map(|cell| match self.occupied.get(cell) {
                        Some(piece) => piece.owner().symbol().to_string(),
                        None => ".".to_string(),
                    })
                    .collect();
                writeln!(f, "  {}", line.join(" "))?;
            }
        }
        write!(f, "to move: {} ({})", self.current_player, self.current_player.marker())
    }
}

/// Read-only view of a board handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct BoardSnapshot {
    /// Player to move.
    #[getter(copy)]
    current_player: PlayerKind,
    /// All pieces, ordered by cell.
    pieces: Vec<Piece>,
}

impl BoardSnapshot {
    /// Returns the piece at `cell`, if any.
    pub fn piece_at(&self, cell: Cell) -> Option<Piece> {
        self.pieces.iter().find(|p| p.cell() == cell).copied()
    }
}

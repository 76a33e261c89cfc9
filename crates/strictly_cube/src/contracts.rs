//! Contract-based validation for placements.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P(state, cell)} place_at {Q(before, after)}`.

use crate::board::BoardState;
use crate::cell::Cell;
use crate::error::PlacementError;
use crate::invariants::{CubeInvariants, InvariantSet};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), PlacementError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), PlacementError>;
}

// ─────────────────────────────────────────────────────────────
//  Placement Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the cell lies inside the lattice.
pub struct CellInLattice;

impl CellInLattice {
    /// Rejects cells with any axis outside `{-1, 0, 1}`.
    #[instrument]
    pub fn check(cell: &Cell) -> Result<(), PlacementError> {
        if cell.is_valid() {
            Ok(())
        } else {
            Err(PlacementError::InvalidCell(*cell))
        }
    }
}

/// Precondition: the cell holds no piece.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects cells that already hold a piece.
    #[instrument(skip(board))]
    pub fn check(cell: &Cell, board: &BoardState) -> Result<(), PlacementError> {
        if board.is_occupied(*cell) {
            Err(PlacementError::CellOccupied(*cell))
        } else {
            Ok(())
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Placement Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for [`BoardState::place_at`].
///
/// Preconditions, in order:
/// - Cell is inside the lattice
/// - Cell is empty
///
/// Postconditions:
/// - Exactly one piece was added, owned by the player who was to move
/// - The turn passed to the opponent
/// - [`CubeInvariants`] hold
pub struct PlacementContract;

impl Contract<BoardState, Cell> for PlacementContract {
    fn pre(board: &BoardState, cell: &Cell) -> Result<(), PlacementError> {
        CellInLattice::check(cell)?;
        CellIsEmpty::check(cell, board)?;
        Ok(())
    }

    fn post(before: &BoardState, after: &BoardState) -> Result<(), PlacementError> {
        if after.len() != before.len() + 1 {
            return Err(PlacementError::InvariantViolation(format!(
                "Postcondition failed: expected {} pieces, found {}",
                before.len() + 1,
                after.len()
            )));
        }

        if after.current_player() != before.current_player().opponent() {
            return Err(PlacementError::InvariantViolation(
                "Postcondition failed: turn did not pass".to_string(),
            ));
        }

        match after.history().last() {
            Some(piece) if piece.owner() == before.current_player() => {}
            _ => {
                return Err(PlacementError::InvariantViolation(
                    "Postcondition failed: last piece not owned by mover".to_string(),
                ));
            }
        }

        CubeInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            PlacementError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

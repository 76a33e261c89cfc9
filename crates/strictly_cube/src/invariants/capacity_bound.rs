//! Capacity invariant: at most 27 pieces, all inside the lattice.

use super::Invariant;
use crate::board::{BoardState, CAPACITY};

/// Invariant: the occupancy record never exceeds the lattice.
///
/// Every key is a valid cell, every piece sits on its own key, and there are
/// at most 27 entries.
pub struct CapacityBound;

impl Invariant<BoardState> for CapacityBound {
    fn holds(board: &BoardState) -> bool {
        board.len() <= CAPACITY
            && board
                .occupied()
                .iter()
                .all(|(cell, piece)| cell.is_valid() && piece.cell() == *cell)
    }

    fn description() -> &'static str {
        "Board holds at most 27 pieces, all inside the lattice"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Piece, PlayerKind};

    #[test]
    fn test_full_board_holds() {
        let mut board = BoardState::new();
        for cell in Cell::ALL {
            board.place_at(cell).unwrap();
        }
        assert!(CapacityBound::holds(&board));
    }

    #[test]
    fn test_out_of_lattice_key_violates() {
        let mut board = BoardState::new();
        let cell = Cell::new(2, 0, 0);
        board.occupied.insert(cell, Piece::new(cell, PlayerKind::First));
        assert!(!CapacityBound::holds(&board));
    }

    #[test]
    fn test_mismatched_piece_violates() {
        let mut board = BoardState::new();
        board
            .occupied
            .insert(Cell::CENTER, Piece::new(Cell::new(1, 1, 1), PlayerKind::First));
        assert!(!CapacityBound::holds(&board));
    }
}

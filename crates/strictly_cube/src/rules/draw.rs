//! Draw detection for the cube.

use super::win::check_winner;
use crate::board::BoardState;
use tracing::instrument;

/// Checks if all 27 cells are occupied.
#[instrument(skip(board))]
pub fn is_full(board: &BoardState) -> bool {
    board.is_full()
}

/// A full board with no completed line.
#[instrument(skip(board))]
pub fn is_draw(board: &BoardState) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&BoardState::new()));
        assert!(!is_draw(&BoardState::new()));
    }

    #[test]
    fn test_full_board_in_order_has_winner() {
        // Alternating through Cell::ALL gives First the corners and center
        // of the top layer, a planar diagonal.
        let mut board = BoardState::new();
        for cell in Cell::ALL {
            board.place_at(cell).unwrap();
        }
        assert!(is_full(&board));
        assert!(check_winner(&board).is_some());
        assert!(!is_draw(&board));
    }
}

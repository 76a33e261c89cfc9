//! Alternating turn invariant: First, Second, First, Second, ...

use super::Invariant;
use crate::board::BoardState;
use crate::types::PlayerKind;

/// Invariant: players alternate, starting with [`PlayerKind::First`].
///
/// The player to move is First exactly when an even number of pieces
/// has been placed.
pub struct AlternatingTurn;

impl Invariant<BoardState> for AlternatingTurn {
    fn holds(board: &BoardState) -> bool {
        let history = board.history();

        if let Some(first) = history.first() {
            if first.owner() != PlayerKind::First {
                return false;
            }
        }

        if history.windows(2).any(|w| w[0].owner() == w[1].owner()) {
            return false;
        }

        let expected = if history.len() % 2 == 0 {
            PlayerKind::First
        } else {
            PlayerKind::Second
        };

        board.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (First, Second, First, ...)"
    }
}

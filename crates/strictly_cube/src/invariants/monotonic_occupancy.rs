//! Monotonic occupancy: cells are filled once and never overwritten.

use super::Invariant;
use crate::board::BoardState;
use std::collections::BTreeMap;

/// Invariant: replaying the placement history reproduces the occupancy record,
/// and no cell appears twice in that history.
pub struct MonotonicOccupancy;

impl Invariant<BoardState> for MonotonicOccupancy {
    fn holds(board: &BoardState) -> bool {
        let mut replayed = BTreeMap::new();

        for piece in board.history() {
            if replayed.insert(piece.cell(), *piece).is_some() {
                return false;
            }
        }

        replayed == *board.occupied()
    }

    fn description() -> &'static str {
        "Cells are filled once and never overwritten"
    }
}

//! Line detection over the 3x3x3 lattice.

use crate::board::BoardState;
use crate::cell::Cell;
use crate::types::PlayerKind;
use std::sync::LazyLock;
use tracing::{debug, instrument};

/// The 13 line directions, one per opposite pair.
///
/// A direction is kept when its first non-zero component is positive.
fn directions() -> Vec<(i8, i8, i8)> {
    let mut dirs = Vec::with_capacity(13);
    for di in -1..=1_i8 {
        for dj in -1..=1_i8 {
            for dk in -1..=1_i8 {
                let first_nonzero = [di, dj, dk].into_iter().find(|c| *c != 0);
                if first_nonzero == Some(1) {
                    dirs.push((di, dj, dk));
                }
            }
        }
    }
    dirs
}

static LINES: LazyLock<Vec<[Cell; 3]>> = LazyLock::new(|| {
    let mut lines = Vec::with_capacity(49);
    for (di, dj, dk) in directions() {
        for middle in Cell::ALL {
            let before = Cell::new(middle.i - di, middle.j - dj, middle.k - dk);
            let after = Cell::new(middle.i + di, middle.j + dj, middle.k + dk);
            if before.is_valid() && after.is_valid() {
                lines.push([before, middle, after]);
            }
        }
    }
    lines
});

/// All 49 straight lines of three cells.
///
/// 27 run parallel to an axis, 18 are diagonals of a planar slice and 4
/// cross the cube through its center.
pub fn winning_lines() -> &'static [[Cell; 3]] {
    &LINES
}

/// Returns the first player holding all three cells of some line, with that line.
#[instrument(skip(board), fields(pieces = board.len()))]
pub fn check_winner(board: &BoardState) -> Option<(PlayerKind, [Cell; 3])> {
    for line in winning_lines() {
        let [a, b, c] = (*line).map(|cell| board.occupied().get(&cell).map(|p| p.owner()));
        if let Some(owner) = a {
            if a == b && b == c {
                debug!(%owner, ?line, "Line completed");
                return Some((owner, *line));
            }
        }
    }
    None
}

//! Logical lattice coordinates.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A logical coordinate in the 3x3x3 lattice.
///
/// Each axis is expected to lie in `{-1, 0, 1}`. Out-of-range values can
/// still be constructed so that upstream resolution bugs reach
/// [`BoardState::place_at`](crate::BoardState::place_at) and are rejected
/// there rather than panicking here.
///
/// Axes: `i` runs left to right, `j` bottom to top, `k` back to front.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Cell {
    /// Left (-1) to right (1).
    pub i: i8,
    /// Bottom (-1) to top (1).
    pub j: i8,
    /// Back (-1) to front (1).
    pub k: i8,
}

const AXIS_RANGE: std::ops::RangeInclusive<i8> = -1..=1;

const HORIZONTAL: [&str; 3] = ["left", "middle", "right"];
const VERTICAL: [&str; 3] = ["bottom", "middle", "top"];
const DEPTH: [&str; 3] = ["back", "middle", "front"];

impl Cell {
    /// Creates a cell without range checking.
    pub const fn new(i: i8, j: i8, k: i8) -> Self {
        Self { i, j, k }
    }

    /// The center of the cube.
    pub const CENTER: Cell = Cell::new(0, 0, 0);

    /// All 27 lattice cells, top layer first, back to front, left to right.
    pub const ALL: [Cell; 27] = {
        let mut cells = [Cell::new(0, 0, 0); 27];
        let mut n = 0;
        while n < 27 {
            let j = 1 - (n / 9) as i8;
            let k = (n / 3 % 3) as i8 - 1;
            let i = (n % 3) as i8 - 1;
            cells[n] = Cell::new(i, j, k);
            n += 1;
        }
        cells
    };

    /// Returns true if every axis lies in `{-1, 0, 1}`.
    #[instrument]
    pub fn is_valid(self) -> bool {
        AXIS_RANGE.contains(&self.i) && AXIS_RANGE.contains(&self.j) && AXIS_RANGE.contains(&self.k)
    }

    /// Index into [`Cell::ALL`], or `None` for out-of-range cells.
    pub fn index(self) -> Option<usize> {
        if !self.is_valid() {
            return None;
        }
        let layer = (1 - self.j) as usize;
        let row = (self.k + 1) as usize;
        let col = (self.i + 1) as usize;
        Some(layer * 9 + row * 3 + col)
    }

    /// Human-readable label such as `top-front-left`.
    ///
    /// Returns `None` for out-of-range cells.
    #[instrument]
    pub fn label(self) -> Option<String> {
        if !self.is_valid() {
            return None;
        }
        Some(format!(
            "{}-{}-{}",
            VERTICAL[(self.j + 1) as usize],
            DEPTH[(self.k + 1) as usize],
            HORIZONTAL[(self.i + 1) as usize]
        ))
    }

    /// Parses a label (`top-front-left`) or three integers (`1 0 -1`, `1,0,-1`).
    ///
    /// Integer input is returned as-is, even when out of range.
    #[instrument]
    pub fn parse(s: &str) -> Option<Cell> {
        let s = s.trim();

        let numbers: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();
        if numbers.len() == 3 {
            if let (Ok(i), Ok(j), Ok(k)) = (
                numbers[0].parse::<i8>(),
                numbers[1].parse::<i8>(),
                numbers[2].parse::<i8>(),
            ) {
                return Some(Cell::new(i, j, k));
            }
        }

        let lower = s.to_lowercase();
        Cell::ALL
            .iter()
            .copied()
            .find(|cell| cell.label().as_deref() == Some(lower.as_str()))
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.label() {
            Some(label) => write!(f, "{}", label),
            None => write!(f, "({}, {}, {})", self.i, self.j, self.k),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_cells_unique_and_valid() {
        let unique: HashSet<Cell> = Cell::ALL.iter().copied().collect();
        assert_eq!(unique.len(), 27);
        assert!(Cell::ALL.iter().all(|c| c.is_valid()));
    }

    #[test]
    fn test_all_order_matches_index() {
        for (n, cell) in Cell::ALL.iter().enumerate() {
            assert_eq!(cell.index(), Some(n));
        }
        assert_eq!(Cell::ALL[0], Cell::new(-1, 1, -1));
        assert_eq!(Cell::ALL[26], Cell::new(1, -1, 1));
    }

    #[test]
    fn test_out_of_range_is_invalid() {
        assert!(!Cell::new(2, 0, 0).is_valid());
        assert!(!Cell::new(0, -2, 0).is_valid());
        assert_eq!(Cell::new(0, 0, 5).index(), None);
        assert_eq!(Cell::new(0, 0, 5).label(), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Cell::new(-1, 1, -1).label().as_deref(), Some("top-back-left"));
        assert_eq!(Cell::new(1, -1, 1).label().as_deref(), Some("bottom-front-right"));
        assert_eq!(Cell::CENTER.to_string(), "middle-middle-middle");
        assert_eq!(Cell::new(2, 0, 0).to_string(), "(2, 0, 0)");
    }

    #[test]
    fn test_parse_numbers_and_labels() {
        assert_eq!(Cell::parse("1 1 1"), Some(Cell::new(1, 1, 1)));
        assert_eq!(Cell::parse(" -1, 0,1 "), Some(Cell::new(-1, 0, 1)));
        assert_eq!(Cell::parse("2 0 0"), Some(Cell::new(2, 0, 0)));
        assert_eq!(Cell::parse("Top-Front-Right"), Some(Cell::new(1, 1, 1)));
        assert_eq!(Cell::parse("nowhere"), None);
        assert_eq!(Cell::parse("1 2"), None);
    }
}

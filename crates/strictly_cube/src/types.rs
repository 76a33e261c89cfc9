//! Core domain types for cube tic-tac-toe.

use crate::cell::Cell;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player identity.
///
/// The first player places spheres, the second places asterisks.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum PlayerKind {
    /// Moves first, rendered as a sphere.
    #[display("First")]
    First,
    /// Moves second, rendered as an asterisk.
    #[display("Second")]
    Second,
}

impl PlayerKind {
    /// Returns the other player.
    #[instrument]
    pub fn opponent(self) -> Self {
        match self {
            PlayerKind::First => PlayerKind::Second,
            PlayerKind::Second => PlayerKind::First,
        }
    }

    /// Returns the marker shape this player's pieces are drawn with.
    #[instrument]
    pub fn marker(self) -> MarkerShape {
        match self {
            PlayerKind::First => MarkerShape::Sphere,
            PlayerKind::Second => MarkerShape::Asterisk,
        }
    }

    /// Single-character symbol used by the text board.
    pub fn symbol(self) -> char {
        match self {
            PlayerKind::First => 'O',
            PlayerKind::Second => '*',
        }
    }
}

/// Visible marker kind for a piece.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum MarkerShape {
    /// Solid sphere.
    #[display("sphere")]
    Sphere,
    /// Radial-spoke marker.
    #[display("asterisk")]
    Asterisk,
}

/// A placed token.
///
/// Pieces are only created by [`BoardState::place_at`](crate::BoardState::place_at)
/// and never change afterwards.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, derive_new::new,
)]
pub struct Piece {
    /// Cell the piece occupies.
    #[getter(copy)]
    cell: Cell,
    /// Player that placed it.
    #[getter(copy)]
    owner: PlayerKind,
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} at {}", self.owner, self.owner.marker(), self.cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opponent_is_involution() {
        for player in PlayerKind::iter() {
            assert_ne!(player.opponent(), player);
            assert_eq!(player.opponent().opponent(), player);
        }
    }

    #[test]
    fn test_markers_differ() {
        assert_eq!(PlayerKind::First.marker(), MarkerShape::Sphere);
        assert_eq!(PlayerKind::Second.marker(), MarkerShape::Asterisk);
    }

    #[test]
    fn test_piece_display() {
        let piece = Piece::new(Cell::new(0, 0, 0), PlayerKind::Second);
        assert_eq!(piece.to_string(), "Second asterisk at middle-middle-middle");
    }
}

//! Line-completion rules for the cube.
//!
//! The board itself never ends a game. These pure functions read the
//! occupancy record and are composed by [`GameSession`](crate::GameSession)
//! when a [`RuleSet`] asks for it.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, winning_lines};

use serde::{Deserialize, Serialize};

/// Which terminal conditions a session applies.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum RuleSet {
    /// No detection: play continues until every cell is filled.
    #[default]
    Open,
    /// Three of one player's pieces in any straight line wins; a full board
    /// without a line is a draw.
    #[serde(alias = "three_in_a_row")]
    #[strum(to_string = "three-in-a-row", serialize = "three_in_a_row")]
    ThreeInARow,
}

impl RuleSet {
    /// Returns true if line detection is active.
    pub fn detects_lines(self) -> bool {
        matches!(self, RuleSet::ThreeInARow)
    }
}

//! Error types for placement, geometry lookup and session access.

use crate::cell::Cell;
use crate::geometry::Offset;
use derive_more::{Display, Error, From};

/// Error returned by a rejected placement.
///
/// Every variant is recoverable: the board is left untouched and the caller
/// should ask for a different cell.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum PlacementError {
    /// The cell lies outside the 27-cell lattice.
    #[display("Cell {} is outside the 3x3x3 lattice", _0)]
    InvalidCell(#[error(not(source))] Cell),

    /// The cell already holds a piece.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Cell),

    /// The session reached a terminal state.
    #[display("Game is already over")]
    GameAlreadyOver,

    /// A postcondition failed after applying the placement.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}

/// Error returned by world-space to lattice lookups.
#[derive(Debug, Clone, Copy, PartialEq, Display, Error)]
pub enum GeometryError {
    /// The offset does not snap to any lattice cell.
    #[display("No cell at offset {}", offset)]
    NotFound {
        /// Offset that failed to resolve.
        #[error(not(source))]
        offset: Offset,
    },
}

/// Error returned by [`SessionManager`](crate::SessionManager) operations.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum SessionError {
    /// No session with the given ID.
    #[display("Session {} not found", _0)]
    #[from(ignore)]
    NotFound(#[error(not(source))] String),

    /// A session with the given ID already exists.
    #[display("Session {} already exists", _0)]
    #[from(ignore)]
    AlreadyExists(#[error(not(source))] String),

    /// The placement itself was rejected.
    #[display("{}", _0)]
    Placement(PlacementError),
}

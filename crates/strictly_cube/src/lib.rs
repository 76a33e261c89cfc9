//! Strictly Cube - 3x3x3 tic-tac-toe played on a cube.
//!
//! This crate holds the board model and turn-management logic for the cube
//! variant. Rendering and input capture live outside; the crate hands them
//! plain data ([`Cell`], [`Piece`], [`Offset`], [`MeshSpec`]).
//!
//! # Architecture
//!
//! - **Geometry**: maps logical cells to world-space offsets and back
//! - **Board**: authoritative occupancy record and the `place_at` protocol
//! - **Rules**: optional line detection over the occupancy record
//! - **Session**: terminal states and lock-serialized multi-session access
//! - **Scene**: mesh descriptors for a rendering collaborator
//!
//! # Example
//!
//! ```
//! use strictly_cube::{BoardState, Cell, PlayerKind};
//!
//! let mut board = BoardState::new();
//! let placement = board.place_at(Cell::new(1, 1, 1)).expect("empty cell");
//! assert_eq!(placement.piece().owner(), PlayerKind::First);
//! assert_eq!(placement.offset().x, 24.0);
//! assert_eq!(board.current_player(), PlayerKind::Second);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod cell;
mod contracts;
mod error;
mod geometry;
mod invariants;
mod pick;
mod rules;
mod scene;
mod session;
mod types;

// Crate-level exports - Lattice and geometry
pub use cell::Cell;
pub use geometry::{CELL_STEP, HIT_HALF_EXTENT, Offset, cell_at, to_offset};
pub use pick::{HitVolume, Ray, hit_volumes, pick};

// Crate-level exports - Board state
pub use board::{BoardSnapshot, BoardState, Placement};
pub use types::{MarkerShape, Piece, PlayerKind};

// Crate-level exports - Errors
pub use error::{GeometryError, PlacementError, SessionError};

// Crate-level exports - Contracts and invariants
pub use contracts::{Contract, PlacementContract};
pub use invariants::{
    AlternatingTurn, CapacityBound, CubeInvariants, Invariant, InvariantSet, InvariantViolation,
    MonotonicOccupancy,
};

// Crate-level exports - Rules
pub use rules::{RuleSet, check_winner, is_draw, is_full, winning_lines};

// Crate-level exports - Sessions
pub use session::{GameSession, GameStatus, SessionId, SessionManager};

// Crate-level exports - Scene descriptors
pub use scene::{
    MeshShape, MeshSpec, PieceRenderer, Rotation, SceneModel, board_lines, hit_volume_meshes,
    piece_meshes,
};

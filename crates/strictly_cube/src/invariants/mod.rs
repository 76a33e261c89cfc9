//! First-class invariants for the cube board.
//!
//! Invariants are logical properties that must hold after every placement.
//! They are checked by [`PlacementContract`](crate::PlacementContract) in
//! debug builds and can be tested independently.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A group of invariants checked in one pass.
pub trait InvariantSet<S> {
    /// Checks every member, collecting all violations rather than stopping
    /// at the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let members: [(fn(&S) -> bool, &'static str); 3] = [
            (I1::holds, I1::description()),
            (I2::holds, I2::description()),
            (I3::holds, I3::description()),
        ];
        let violations: Vec<_> = members
            .into_iter()
            .filter(|(holds, _)| !holds(state))
            .map(|(_, description)| InvariantViolation::new(description))
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod alternating_turn;
pub mod capacity_bound;
pub mod monotonic_occupancy;

pub use alternating_turn::AlternatingTurn;
pub use capacity_bound::CapacityBound;
pub use monotonic_occupancy::MonotonicOccupancy;

/// All board invariants as a composable set.
pub type CubeInvariants = (MonotonicOccupancy, AlternatingTurn, CapacityBound);

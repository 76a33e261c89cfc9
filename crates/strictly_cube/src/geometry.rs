//! Mapping between lattice cells and world-space offsets.
//!
//! Cells are spaced [`CELL_STEP`] units apart along every axis with the
//! center cell at the origin. The mapping is linear, so the inverse simply
//! snaps each axis to the nearest step.

use crate::cell::Cell;
use crate::error::GeometryError;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Distance between adjacent cell centers along each axis.
pub const CELL_STEP: f64 = 24.0;

/// Half-extent of each cell's hit-test volume along each axis.
pub const HIT_HALF_EXTENT: f64 = 12.0;

/// World-space coordinate used for rendering placement.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    /// Horizontal axis.
    pub x: f64,
    /// Vertical axis.
    pub y: f64,
    /// Depth axis.
    pub z: f64,
}

impl Offset {
    /// Creates an offset.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The world origin.
    pub const ORIGIN: Offset = Offset::new(0.0, 0.0, 0.0);

    /// Components as an array, in `x, y, z` order.
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Returns true if no component is NaN or infinite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f64; 3]> for Offset {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

impl std::fmt::Display for Offset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Converts a cell to the world-space offset of its center.
///
/// Total and pure: out-of-range cells map linearly as well.
#[instrument]
pub fn to_offset(cell: Cell) -> Offset {
    Offset {
        x: f64::from(cell.i) * CELL_STEP,
        y: f64::from(cell.j) * CELL_STEP,
        z: f64::from(cell.k) * CELL_STEP,
    }
}

/// Resolves a world-space offset to the nearest lattice cell.
///
/// # Errors
///
/// Returns [`GeometryError::NotFound`] if any axis snaps outside `{-1, 0, 1}`
/// or the offset is not finite.
#[instrument]
pub fn cell_at(offset: Offset) -> Result<Cell, GeometryError> {
    let not_found = GeometryError::NotFound { offset };

    if !offset.is_finite() {
        debug!("Offset is not finite");
        return Err(not_found);
    }

    let snap = |v: f64| -> Option<i8> {
        let step = (v / CELL_STEP).round();
        if (-1.0..=1.0).contains(&step) {
            Some(step as i8)
        } else {
            None
        }
    };

    match (snap(offset.x), snap(offset.y), snap(offset.z)) {
        (Some(i), Some(j), Some(k)) => Ok(Cell::new(i, j, k)),
        _ => {
            debug!("Offset snaps outside the lattice");
            Err(not_found)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_maps_to_origin() {
        assert_eq!(to_offset(Cell::CENTER), Offset::ORIGIN);
    }

    #[test]
    fn test_corner_offset() {
        assert_eq!(to_offset(Cell::new(1, 1, 1)), Offset::new(24.0, 24.0, 24.0));
        assert_eq!(
            to_offset(Cell::new(-1, 0, 1)),
            Offset::new(-24.0, 0.0, 24.0)
        );
    }

    #[test]
    fn test_round_trip_all_cells() {
        for cell in Cell::ALL {
            assert_eq!(cell_at(to_offset(cell)), Ok(cell));
        }
    }

    #[test]
    fn test_cell_at_snaps_to_nearest() {
        assert_eq!(cell_at(Offset::new(11.9, -13.0, 30.0)), Ok(Cell::new(0, -1, 1)));
        assert_eq!(cell_at(Offset::new(-35.0, 0.0, 0.0)), Ok(Cell::new(-1, 0, 0)));
    }

    #[test]
    fn test_cell_at_outside_lattice() {
        let far = Offset::new(48.0, 0.0, 0.0);
        assert_eq!(cell_at(far), Err(GeometryError::NotFound { offset: far }));
        assert!(cell_at(Offset::new(0.0, -36.5, 0.0)).is_err());
    }

    #[test]
    fn test_cell_at_rejects_nan() {
        assert!(cell_at(Offset::new(f64::NAN, 0.0, 0.0)).is_err());
        assert!(cell_at(Offset::new(0.0, f64::INFINITY, 0.0)).is_err());
    }
}

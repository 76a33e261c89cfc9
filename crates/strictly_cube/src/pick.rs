//! Ray picking against the hidden per-cell hit volumes.
//!
//! Each lattice cell owns an axis-aligned box centered at
//! [`to_offset`](crate::to_offset) with [`HIT_HALF_EXTENT`] on every axis.
//! Resolving a pointer ray to a cell is a nearest-hit slab test over the 27
//! boxes.

use crate::cell::Cell;
use crate::geometry::{HIT_HALF_EXTENT, Offset, to_offset};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A half-line in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    /// Start point.
    pub origin: Offset,
    /// Direction, need not be normalized.
    pub direction: Offset,
}

impl Ray {
    /// Creates a ray.
    pub fn new(origin: Offset, direction: Offset) -> Self {
        Self { origin, direction }
    }
}

/// Axis-aligned hit-test box for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitVolume {
    /// Cell this volume resolves to.
    pub cell: Cell,
    /// Box center.
    pub center: Offset,
    /// Half-extent along every axis.
    pub half_extent: f64,
}

impl HitVolume {
    /// Parametric distance along `ray` to the entry point, if the ray hits.
    ///
    /// A ray starting inside the box reports `0.0`.
    pub fn intersect(&self, ray: &Ray) -> Option<f64> {
        let origin = ray.origin.to_array();
        let direction = ray.direction.to_array();
        let center = self.center.to_array();

        let mut t_min = 0.0_f64;
        let mut t_max = f64::INFINITY;

        for axis in 0..3 {
            let lo = center[axis] - self.half_extent;
            let hi = center[axis] + self.half_extent;

            if direction[axis] == 0.0 {
                if origin[axis] < lo || origin[axis] > hi {
                    return None;
                }
                continue;
            }

            let inv = 1.0 / direction[axis];
            let mut t0 = (lo - origin[axis]) * inv;
            let mut t1 = (hi - origin[axis]) * inv;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_min = t_min.max(t0);
            t_max = t_max.min(t1);
            if t_min > t_max {
                return None;
            }
        }

        Some(t_min)
    }
}

/// The 27 hit volumes, in [`Cell::ALL`] order.
#[instrument]
pub fn hit_volumes() -> [HitVolume; 27] {
    Cell::ALL.map(|cell| HitVolume {
        cell,
        center: to_offset(cell),
        half_extent: HIT_HALF_EXTENT,
    })
}

/// Resolves a ray to the nearest cell whose hit volume it crosses.
///
/// Returns `None` for a zero or non-finite direction, or when nothing is hit.
#[instrument]
pub fn pick(ray: &Ray) -> Option<Cell> {
    if !ray.origin.is_finite() || !ray.direction.is_finite() {
        debug!("Ray is not finite");
        return None;
    }
    if ray.direction.to_array().iter().all(|c| *c == 0.0) {
        debug!("Ray has zero direction");
        return None;
    }

    let hit = hit_volumes()
        .iter()
        .filter_map(|volume| volume.intersect(ray).map(|t| (t, volume.cell)))
        .min_by(|(a, _), (b, _)| a.total_cmp(b))
        .map(|(_, cell)| cell);

    debug!(?hit, "Resolved ray");
    hit
}

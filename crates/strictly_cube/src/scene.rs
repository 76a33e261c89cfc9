//! Mesh descriptors for a rendering collaborator.
//!
//! Nothing here draws. The functions describe the board frame, the hidden
//! hit-test markers and the two piece shapes as plain data that a renderer
//! turns into its own scene nodes.

use crate::cell::Cell;
use crate::geometry::{HIT_HALF_EXTENT, Offset};
use crate::pick::hit_volumes;
use crate::types::{MarkerShape, PlayerKind};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::{debug, instrument};

/// Length of a board frame bar.
const BAR_LENGTH: f64 = 64.0;
/// Cross-section of a board frame bar.
const BAR_THICKNESS: f64 = 4.0;
/// Frame bars sit halfway between cell centers.
const BAR_OFFSET: f64 = 12.0;
const SPHERE_RADIUS: f64 = 8.0;
const SPOKE_LENGTH: f64 = 16.0;
const SPOKE_THICKNESS: f64 = 4.0;

/// Primitive geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MeshShape {
    /// Axis-aligned box with full extents.
    Cuboid {
        /// Extent along x.
        width: f64,
        /// Extent along y.
        height: f64,
        /// Extent along z.
        depth: f64,
    },
    /// Sphere centered on the mesh position.
    Sphere {
        /// Radius.
        radius: f64,
    },
}

/// Euler rotation in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rotation {
    /// About x.
    pub x: f64,
    /// About y.
    pub y: f64,
    /// About z.
    pub z: f64,
}

/// One mesh to instantiate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeshSpec {
    /// Geometry.
    pub shape: MeshShape,
    /// World-space position of the mesh origin.
    pub position: Offset,
    /// Orientation.
    pub rotation: Rotation,
    /// Draw edges only.
    pub wireframe: bool,
}

impl MeshSpec {
    fn solid(shape: MeshShape, position: Offset) -> Self {
        Self {
            shape,
            position,
            rotation: Rotation::default(),
            wireframe: false,
        }
    }
}

/// The 12 bars that outline the cube's inner grid, four per axis.
#[instrument]
pub fn board_lines() -> Vec<MeshSpec> {
    let corners = [
        (-BAR_OFFSET, BAR_OFFSET),
        (-BAR_OFFSET, -BAR_OFFSET),
        (BAR_OFFSET, BAR_OFFSET),
        (BAR_OFFSET, -BAR_OFFSET),
    ];

    let mut lines = Vec::with_capacity(12);
    // Vertical bars
    for (x, z) in corners {
        lines.push(MeshSpec::solid(
            MeshShape::Cuboid {
                width: BAR_THICKNESS,
                height: BAR_LENGTH,
                depth: BAR_THICKNESS,
            },
            Offset::new(x, 0.0, z),
        ));
    }
    // Horizontal bars
    for (y, z) in corners {
        lines.push(MeshSpec::solid(
            MeshShape::Cuboid {
                width: BAR_LENGTH,
                height: BAR_THICKNESS,
                depth: BAR_THICKNESS,
            },
            Offset::new(0.0, y, z),
        ));
    }
    // Depth bars
    for (x, y) in corners {
        lines.push(MeshSpec::solid(
            MeshShape::Cuboid {
                width: BAR_THICKNESS,
                height: BAR_THICKNESS,
                depth: BAR_LENGTH,
            },
            Offset::new(x, y, 0.0),
        ));
    }
    lines
}

/// Wireframe markers for the 27 hit volumes, in [`Cell::ALL`] order.
#[instrument]
pub fn hit_volume_meshes() -> Vec<MeshSpec> {
    let extent = HIT_HALF_EXTENT * 2.0;
    hit_volumes()
        .iter()
        .map(|volume| MeshSpec {
            shape: MeshShape::Cuboid {
                width: extent,
                height: extent,
                depth: extent,
            },
            position: volume.center,
            rotation: Rotation::default(),
            wireframe: true,
        })
        .collect()
}

/// Meshes for one piece of `kind` centered at `offset`.
///
/// A sphere for [`PlayerKind::First`]; for [`PlayerKind::Second`] an
/// upright spoke plus four spokes tilted a third of a turn about z and an
/// eighth of a turn either way about y.
#[instrument]
pub fn piece_meshes(kind: PlayerKind, offset: Offset) -> Vec<MeshSpec> {
    match kind.marker() {
        MarkerShape::Sphere => vec![MeshSpec::solid(
            MeshShape::Sphere {
                radius: SPHERE_RADIUS,
            },
            offset,
        )],
        MarkerShape::Asterisk => {
            let spoke = MeshShape::Cuboid {
                width: SPOKE_THICKNESS,
                height: SPOKE_LENGTH,
                depth: SPOKE_THICKNESS,
            };
            let tilts = [
                (0.0, 0.0),
                (PI / 3.0, PI / 4.0),
                (-PI / 3.0, -PI / 4.0),
                (-PI / 3.0, PI / 4.0),
                (PI / 3.0, -PI / 4.0),
            ];
            tilts
                .iter()
                .map(|&(z, y)| MeshSpec {
                    shape: spoke,
                    position: offset,
                    rotation: Rotation { x: 0.0, y, z },
                    wireframe: false,
                })
                .collect()
        }
    }
}

/// Rendering collaborator that turns placements into visible pieces.
pub trait PieceRenderer {
    /// Opaque handle for the renderer's own bookkeeping.
    type Handle;

    /// Instantiates a piece mesh for `kind` at `offset`.
    fn spawn_piece(&mut self, kind: PlayerKind, offset: Offset) -> Self::Handle;
}

/// In-memory scene: static board meshes plus pieces grouped by player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneModel {
    board_lines: Vec<MeshSpec>,
    hit_volumes: Vec<MeshSpec>,
    spheres: Vec<Vec<MeshSpec>>,
    asterisks: Vec<Vec<MeshSpec>>,
}

impl SceneModel {
    /// Builds the static board with no pieces.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board_lines: board_lines(),
            hit_volumes: hit_volume_meshes(),
            spheres: Vec::new(),
            asterisks: Vec::new(),
        }
    }

    /// Board frame bars.
    pub fn board_lines(&self) -> &[MeshSpec] {
        &self.board_lines
    }

    /// Hidden hit-test markers.
    pub fn hit_volumes(&self) -> &[MeshSpec] {
        &self.hit_volumes
    }

    /// Spawned sphere pieces, one mesh group each.
    pub fn spheres(&self) -> &[Vec<MeshSpec>] {
        &self.spheres
    }

    /// Spawned asterisk pieces, one mesh group each.
    pub fn asterisks(&self) -> &[Vec<MeshSpec>] {
        &self.asterisks
    }

    /// Removes all pieces, keeping the board.
    #[instrument(skip(self))]
    pub fn clear_pieces(&mut self) {
        self.spheres.clear();
        self.asterisks.clear();
    }

    /// Hit marker mesh for `cell`, if it is in the lattice.
    pub fn hit_volume_for(&self, cell: Cell) -> Option<&MeshSpec> {
        cell.index().and_then(|n| self.hit_volumes.get(n))
    }
}

impl Default for SceneModel {
    fn default() -> Self {
        Self::new()
    }
}

impl PieceRenderer for SceneModel {
    /// Player group and position within it.
    type Handle = (PlayerKind, usize);

    fn spawn_piece(&mut self, kind: PlayerKind, offset: Offset) -> Self::Handle {
        let meshes = piece_meshes(kind, offset);
        let group = match kind {
            PlayerKind::First => &mut self.spheres,
            PlayerKind::Second => &mut self.asterisks,
        };
        group.push(meshes);
        debug!(%kind, %offset, count = group.len(), "Spawned piece");
        (kind, group.len() - 1)
    }
}

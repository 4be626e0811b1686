//! Integer grid coordinates for the block world.

use bytemuck::{Pod, Zeroable};
use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};

/// Address of one grid cell.
///
/// Blocks occupy unit cells addressed by integer coordinates; two positions
/// are the same cell iff all three components match. This is the key type
/// for the terrain store, so it is `Eq + Hash`; continuous positions are
/// never used as keys.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize,
)]
#[repr(C)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub _pad: i32,
}

impl GridPos {
    /// Create a new grid position.
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z, _pad: 0 }
    }

    /// Snap a continuous position to the cell it falls in.
    ///
    /// Each axis is rounded to the nearest integer, ties rounding away from
    /// zero (`f32::round`). This is the sole bridge between rendered
    /// positions and grid keys.
    #[inline]
    #[must_use]
    pub fn from_world(position: Vec3) -> Self {
        Self::new(
            position.x.round() as i32,
            position.y.round() as i32,
            position.z.round() as i32,
        )
    }

    /// The cell's render position (cell center on the unit grid).
    #[inline]
    #[must_use]
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }

    /// Convert to glam `IVec3`.
    #[inline]
    #[must_use]
    pub const fn to_ivec3(self) -> IVec3 {
        IVec3::new(self.x, self.y, self.z)
    }

    /// The neighboring cell across the given axis offset.
    #[inline]
    #[must_use]
    pub const fn offset(self, delta: IVec3) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y, self.z + delta.z)
    }
}

impl From<IVec3> for GridPos {
    fn from(v: IVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<GridPos> for IVec3 {
    fn from(pos: GridPos) -> Self {
        pos.to_ivec3()
    }
}

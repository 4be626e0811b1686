//! World configuration.

use sandvox_core::{BlockKind, Error, Result};
use serde::{Deserialize, Serialize};

use crate::WorldSeed;

/// Tunables for terrain generation and the block grid.
///
/// Supplied once at startup and read-only thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Lateral extent of the generated chunk, in cells.
    pub chunk_size: i32,
    /// Vertical extent bound; half of it is the generation midpoint.
    pub chunk_height: i32,
    /// Number of noise octaves for detail.
    pub octaves: usize,
    /// Seed for noise generation.
    pub seed: WorldSeed,
    /// Horizontal scale of terrain features.
    pub scale: f64,
    /// Vertical relief of the terrain.
    pub amplitude: f64,
    /// Kind used for the top layer of a column.
    pub surface_block: BlockKind,
    /// Kind used for the layers just below the surface.
    pub subsurface_block: BlockKind,
    /// Kind used for the deep layers.
    pub foundation_block: BlockKind,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            chunk_size: 20,
            chunk_height: 8,
            octaves: 3,
            seed: 3_817,
            scale: 48.0,
            amplitude: 3.5,
            surface_block: BlockKind::Grass,
            subsurface_block: BlockKind::Dirt,
            foundation_block: BlockKind::Stone,
        }
    }
}

impl WorldConfig {
    /// Validate the configuration before any generation runs.
    ///
    /// Failures are fatal at startup; no partial generation is attempted.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size <= 0 {
            return Err(Error::InvalidConfig(format!(
                "chunk_size must be positive, got {}",
                self.chunk_size
            )));
        }
        if self.chunk_height <= 0 {
            return Err(Error::InvalidConfig(format!(
                "chunk_height must be positive, got {}",
                self.chunk_height
            )));
        }
        if self.octaves == 0 {
            return Err(Error::InvalidConfig(
                "octaves must be at least 1".to_string(),
            ));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "scale must be positive and finite, got {}",
                self.scale
            )));
        }
        if !self.amplitude.is_finite() || self.amplitude < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "amplitude must be non-negative and finite, got {}",
                self.amplitude
            )));
        }
        Ok(())
    }

    /// Half the lateral extent; generated columns span `[-half, half)`.
    #[must_use]
    pub const fn half_size(&self) -> i32 {
        self.chunk_size / 2
    }
}

//! Deterministic height field sampled from fractal noise.

use noise::{Fbm, MultiFractal, NoiseFn, Perlin};
use sandvox_core::BlockKind;

use crate::config::WorldConfig;

/// Depth below the column top that still uses the sub-surface kind.
const SUBSURFACE_DEPTH: i32 = 2;

/// Column height generator.
///
/// A pure function of (x, z) for a fixed configuration — no cached
/// heightmap, so chunk generation stays stateless and directly testable.
/// Amplitude controls vertical relief, scale controls horizontal feature
/// size.
pub struct HeightField {
    noise: Fbm<Perlin>,
    scale: f64,
    amplitude: f64,
    midpoint: i32,
    surface: BlockKind,
    subsurface: BlockKind,
    foundation: BlockKind,
}

impl HeightField {
    /// Build a height field for the given configuration.
    #[must_use]
    pub fn new(config: &WorldConfig) -> Self {
        let noise = Fbm::<Perlin>::new(config.seed).set_octaves(config.octaves);
        Self {
            noise,
            scale: config.scale,
            amplitude: config.amplitude,
            midpoint: config.chunk_height / 2,
            surface: config.surface_block,
            subsurface: config.subsurface_block,
            foundation: config.foundation_block,
        }
    }

    /// Number of solid layers in the column at (x, z).
    ///
    /// Deterministic for a fixed (seed, octaves, scale, amplitude,
    /// chunk_height). `height - 1` is the topmost occupied layer index; a
    /// non-positive height means the column is entirely empty.
    #[must_use]
    pub fn height_at(&self, x: i32, z: i32) -> i32 {
        let nx = f64::from(x) / self.scale;
        let nz = f64::from(z) / self.scale;

        // Noise is roughly [-1, 1]; shift and scale it into a layer count
        // around the chunk-height midpoint.
        let noise_value = self.noise.get([nx, nz]);
        ((noise_value + 1.0) * self.amplitude).floor() as i32 + self.midpoint
    }

    /// Kind for layer `y` in a column whose topmost layer is `column_top`.
    ///
    /// Fixed three-tier policy: surface on top, sub-surface for the next
    /// `SUBSURFACE_DEPTH` layers, foundation below.
    #[must_use]
    pub fn kind_for_layer(&self, y: i32, column_top: i32) -> BlockKind {
        if y == column_top {
            self.surface
        } else if column_top - y <= SUBSURFACE_DEPTH {
            self.subsurface
        } else {
            self.foundation
        }
    }
}

//! Terrain generation and block storage for the Sandvox sandbox.

pub mod config;
pub mod heightfield;
pub mod store;

pub use config::WorldConfig;
pub use heightfield::HeightField;
pub use store::{Block, BlockInstanceId, TerrainStore};

/// Seed for procedural generation.
pub type WorldSeed = u32;

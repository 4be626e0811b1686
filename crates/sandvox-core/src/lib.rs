//! Core types for the Sandvox voxel sandbox.
//!
//! This crate provides the foundational types used throughout the engine:
//! - Block kinds and their display definitions
//! - The block catalog
//! - Integer grid coordinates and the continuous-position bridge
//! - Common error types

pub mod catalog;
pub mod coords;
pub mod error;
pub mod types;

pub use catalog::BlockCatalog;
pub use coords::GridPos;
pub use error::{Error, Result};
pub use types::{BlockDefinition, BlockKind, Rgb};

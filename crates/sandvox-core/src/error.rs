//! Error types for the engine.

use thiserror::Error;

use crate::types::BlockKind;

/// Engine-wide error type.
#[derive(Error, Debug)]
pub enum Error {
    /// A block kind with no catalog definition was requested.
    #[error("no catalog definition for block kind {0:?}")]
    UnknownBlockKind(BlockKind),

    /// Configuration rejected at startup.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

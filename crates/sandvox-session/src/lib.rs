//! Session control for the Sandvox sandbox.
//!
//! This crate routes discrete input events into terrain mutations and keeps
//! the rendering host's view of the world in sync. The host itself — window,
//! renderer, input device — lives behind the [`SceneHost`] trait; everything
//! here is plain single-threaded state.

pub mod config;
pub mod controller;
pub mod edit;
pub mod events;
pub mod host;

pub use config::SessionConfig;
pub use controller::{SessionSignal, WorldController};
pub use edit::{EditEngine, EditOutcome};
pub use events::SessionEvent;
pub use host::{HoverHit, RenderHandle, SceneHost};

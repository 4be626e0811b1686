//! Session configuration.

use sandvox_world::WorldConfig;
use serde::{Deserialize, Serialize};

/// Presentation and gameplay tunables for one session.
///
/// Set once at startup and read-only thereafter. Only `world` feeds the
/// terrain model; the rest is consumed by the window and player glue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Window title.
    pub window_title: String,
    /// Enable vsync.
    pub vsync_enabled: bool,
    /// Show the FPS counter.
    pub show_fps: bool,
    /// Maximum reach for place/remove hit-tests.
    pub build_distance: f32,
    /// Player movement speed.
    pub player_speed: f32,
    /// Player jump height.
    pub player_jump_height: f32,
    /// Gravity strength applied to the player.
    pub gravity_strength: f32,
    /// Terrain model tunables.
    pub world: WorldConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            window_title: "Sandvox".to_string(),
            vsync_enabled: true,
            show_fps: true,
            build_distance: 16.0,
            player_speed: 6.0,
            player_jump_height: 2.0,
            gravity_strength: 1.0,
            world: WorldConfig::default(),
        }
    }
}

//! Sandvox headless session driver.
//!
//! Generates a terrain chunk, replays a scripted sequence of place/remove
//! edits through the world controller against a recording scene host, and
//! logs the HUD lines a real session would show.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p sandvox-sim -- [OPTIONS]
//! ```
//!
//! ## Options
//!
//! - `--seed <N>`: World generation seed (default: 3817)
//! - `--chunk-size <N>`: Lateral chunk extent (default: 20)
//! - `--rounds <N>`: Edit rounds to replay (default: 8)
//! - `--assets <DIR>`: Texture directory (default: assets/textures)
//! - `-h, --help`: Print help message
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: Set log level (e.g., info, debug, trace)

mod host;

use anyhow::{ensure, Result};
use glam::Vec3;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sandvox_core::GridPos;
use sandvox_session::{SessionConfig, SessionEvent, SessionSignal, WorldController};
use sandvox_world::TerrainStore;

use crate::host::RecordingHost;

/// CLI parameters for one sim run.
#[derive(Debug, Clone)]
struct SimParams {
    seed: u32,
    chunk_size: i32,
    rounds: usize,
    assets_dir: String,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            seed: 3_817,
            chunk_size: 20,
            rounds: 8,
            assets_dir: "assets/textures".to_string(),
        }
    }
}

impl SimParams {
    /// Parse parameters from command line arguments.
    fn from_args() -> Self {
        let mut params = Self::default();
        let args: Vec<String> = std::env::args().collect();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--seed" => {
                    if i + 1 < args.len() {
                        if let Ok(v) = args[i + 1].parse() {
                            params.seed = v;
                            i += 1;
                        }
                    }
                }
                "--chunk-size" => {
                    if i + 1 < args.len() {
                        if let Ok(v) = args[i + 1].parse() {
                            params.chunk_size = v;
                            i += 1;
                        }
                    }
                }
                "--rounds" => {
                    if i + 1 < args.len() {
                        if let Ok(v) = args[i + 1].parse() {
                            params.rounds = v;
                            i += 1;
                        }
                    }
                }
                "--assets" => {
                    if i + 1 < args.len() {
                        params.assets_dir = args[i + 1].clone();
                        i += 1;
                    }
                }
                _ => {}
            }
            i += 1;
        }

        params
    }
}

fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "-h" || arg == "--help") {
        print_help();
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let params = SimParams::from_args();
    info!(
        "Sandvox sim starting: seed={} chunk_size={} rounds={}",
        params.seed, params.chunk_size, params.rounds
    );

    let mut config = SessionConfig::default();
    config.world.seed = params.seed;
    config.world.chunk_size = params.chunk_size;

    let mut controller = WorldController::new(config)?;
    let mut scene = RecordingHost::new(&params.assets_dir);
    controller.sync_scene(&mut scene);

    info!("{}", controller.instruction_text());
    info!("{}", controller.status_text());

    run_script(&mut controller, &mut scene, params.rounds)?;

    info!("{}", controller.status_text());
    info!(
        "scene objects: {} live, {} spawned, {} disposed",
        scene.live_count(),
        scene.spawned(),
        scene.disposed()
    );
    info!("Sandvox sim finished");
    Ok(())
}

/// Replay `rounds` of deterministic edits: select a kind, stack a block on a
/// surface column, remove it again, and poke the protected floor.
fn run_script(
    controller: &mut WorldController,
    scene: &mut RecordingHost,
    rounds: usize,
) -> Result<()> {
    let half = controller.config().world.half_size();
    let span = i64::from(half) * 2;
    ensure!(span > 0, "chunk has no columns to edit");

    for round in 0..rounds {
        // Walk the diagonal of the generated chunk, wrapping as needed.
        let offset = i32::try_from(round as i64 % span)?;
        let (x, z) = (offset - half, offset - half);
        let Some(top) = column_top(controller.store(), x, z) else {
            info!("round {round}: column ({x}, {z}) is empty, skipping");
            continue;
        };

        let slot = (round % 5) + 1;
        let _ = controller.handle_event(SessionEvent::SelectSlot(slot), scene);

        // Build one block on the column top, then tear it down again.
        scene.point_at(top.to_vec3(), Vec3::Y);
        let _ = controller.handle_event(SessionEvent::PlaceRequested, scene);
        let stacked = top.offset(glam::IVec3::Y);
        scene.point_at(stacked.to_vec3(), Vec3::Y);
        let _ = controller.handle_event(SessionEvent::RemoveRequested, scene);

        // The floor layer refuses removal; this must leave the count alone.
        scene.point_at(GridPos::new(x, 0, z).to_vec3(), Vec3::Y);
        let _ = controller.handle_event(SessionEvent::RemoveRequested, scene);

        // A hover miss is ignored outright.
        scene.clear_hover();
        let _ = controller.handle_event(SessionEvent::PlaceRequested, scene);

        info!(
            "round {round}: column ({x}, {z}) top y={} | {} | selected {}",
            top.y,
            controller.status_text(),
            controller.selected_block().name()
        );
    }

    let _ = controller.handle_event(SessionEvent::ToggleCursorLock, scene);
    let signal = controller.handle_event(SessionEvent::Quit, scene);
    ensure!(signal == SessionSignal::Quit, "quit event must terminate");
    Ok(())
}

/// Topmost occupied cell of the column at (x, z), if any.
fn column_top(store: &TerrainStore, x: i32, z: i32) -> Option<GridPos> {
    (0..256)
        .rev()
        .map(|y| GridPos::new(x, y, z))
        .find(|pos| store.contains(*pos))
}

fn print_help() {
    eprintln!(
        "Sandvox Headless Session Driver

USAGE:
    cargo run -p sandvox-sim -- [OPTIONS]

OPTIONS:
    --seed <N>         World generation seed (default: 3817)
    --chunk-size <N>   Lateral chunk extent (default: 20)
    --rounds <N>       Edit rounds to replay (default: 8)
    --assets <DIR>     Texture directory (default: assets/textures)
    -h, --help         Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG           Set log level (e.g., info, debug, trace)"
    );
}

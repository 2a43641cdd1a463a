//! Headless sandbox that flies a camera over a voxel world and digs with raycasts.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p cubecast-demo -- --frames 600 --reach 4`.

mod camera;
mod input;
mod script;
mod session;

use std::process::ExitCode;

use clap::Parser;
use cubecast_config::{CliArgs, Config, ConfigError, default_config_dir};
use cubecast_voxel::WorldError;
use thiserror::Error;
use tracing::info;

use crate::script::scripted_frame;
use crate::session::{Session, SessionStats};

#[derive(Debug, Error)]
enum DemoError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to build world: {0}")]
    World(#[from] WorldError),
}

fn run(config: &Config, frames: u32) -> Result<SessionStats, DemoError> {
    config.validate()?;
    let mut session = Session::from_config(config)?;
    info!(
        "Starting session: {} chunks, reach {}, camera at {}",
        session.world().chunk_count(),
        config.raycast.reach,
        session.camera().position
    );

    for frame in 0..frames {
        let report = session.update(&scripted_frame(frame));
        if let Some(cell) = report.removed {
            info!("Frame {frame}: dug {cell} at distance {:.2}", report.target.distance);
        }
        if let Some(cell) = report.placed {
            info!("Frame {frame}: placed {cell}");
        }
    }

    let stats = session.stats();
    let solid: usize = session
        .world()
        .iter()
        .map(|(_, chunk)| chunk.solid_count())
        .sum();
    info!(
        "Session finished: {} frames, {} removed, {} placed, {} rejected",
        stats.frames, stats.removed, stats.placed, stats.rejected
    );
    info!(
        "Camera at {} (yaw {:.1}, pitch {:.1}); {} solid blocks in {} dirty chunks",
        session.camera().position,
        session.camera().yaw,
        session.camera().pitch,
        solid,
        session.world().dirty_chunks().count()
    );
    Ok(stats)
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(default_config_dir);

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    if let Err(e) =
        cubecast_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config))
    {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(&config, args.frames) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

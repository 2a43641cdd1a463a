//! Command-line argument parsing for the cubecast sandbox.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use cubecast_voxel::WorldPreset;

use crate::Config;

/// World layouts selectable from the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PresetArg {
    /// Solid floor chunk plus a sparse neighbour.
    Reference,
    /// 2×2 chunks of four-layer floor, within the default chunk limit.
    Flat,
    /// One empty chunk.
    Empty,
}

impl PresetArg {
    fn to_preset(self) -> WorldPreset {
        match self {
            PresetArg::Reference => WorldPreset::Reference,
            PresetArg::Flat => WorldPreset::Flat {
                radius: 1,
                layers: 4,
            },
            PresetArg::Empty => WorldPreset::Empty,
        }
    }
}

/// cubecast command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "cubecast", about = "Voxel raycast sandbox")]
pub struct CliArgs {
    /// Targeting reach in blocks.
    #[arg(long)]
    pub reach: Option<f32>,

    /// Number of scripted frames to simulate.
    #[arg(long, default_value_t = 240)]
    pub frames: u32,

    /// Initial world layout.
    #[arg(long, value_enum)]
    pub preset: Option<PresetArg>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(reach) = args.reach {
            self.raycast.reach = reach;
        }
        if let Some(preset) = args.preset {
            // Keep a configured flat layout instead of resetting its size.
            let keep = matches!(
                (preset, &self.world.preset),
                (PresetArg::Flat, WorldPreset::Flat { .. })
            );
            if !keep {
                self.world.preset = preset.to_preset();
            }
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

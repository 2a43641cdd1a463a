//! Configuration for the cubecast sandbox.
//!
//! Settings persist to disk as RON, can be overridden from the command line
//! via clap, and support hot-reload detection.

mod cli;
mod config;
mod error;

pub use cli::{CliArgs, PresetArg};
pub use config::{
    CameraConfig, Config, DebugConfig, RaycastConfig, WorldConfig, default_config_dir,
};
pub use error::ConfigError;

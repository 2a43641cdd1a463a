//! Structured logging for the cubecast sandbox.
//!
//! Console output with uptime timestamps and module paths, plus an optional
//! JSON log file for post-mortem analysis. `RUST_LOG` takes precedence over the
//! configured log level.

use std::fs::File;
use std::path::{Path, PathBuf};

use cubecast_config::Config;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `RUST_LOG` nor the config names a level.
pub const DEFAULT_FILTER: &str = "info";

/// Name of the JSON log file inside the log directory.
pub const LOG_FILE_NAME: &str = "cubecast.log";

/// Install the global tracing subscriber.
///
/// The JSON file layer is added when `log_dir` is given and either this is a
/// debug build or `config.debug.log_to_file` is set. A log file that cannot be
/// created is reported on the console and otherwise ignored.
///
/// # Errors
///
/// Fails if a global subscriber has already been installed.
///
/// # Examples
///
/// ```no_run
/// use cubecast_config::Config;
/// use cubecast_log::init_logging;
///
/// let config = Config::default();
/// init_logging(Some(std::path::Path::new("./logs")), true, Some(&config)).unwrap();
/// ```
pub fn init_logging(
    log_dir: Option<&Path>,
    debug_build: bool,
    config: Option<&Config>,
) -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(config)));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_names(false)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    let wants_file = debug_build || config.is_some_and(|c| c.debug.log_to_file);
    let mut file_error = None;
    let log_file = match log_dir {
        Some(dir) if wants_file => match open_log_file(dir) {
            Ok(file) => Some(file),
            Err(e) => {
                file_error = Some((log_file_path(dir), e));
                None
            }
        },
        _ => None,
    };

    let file_layer = log_file.map(|file| {
        fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json()
    });
    subscriber.with(file_layer).try_init()?;

    if let Some((path, e)) = file_error {
        tracing::warn!("Could not open log file {}: {e}", path.display());
    }
    Ok(())
}

/// Filter directives from the config's `debug.log_level`, or [`DEFAULT_FILTER`].
pub fn filter_directives(config: Option<&Config>) -> String {
    match config {
        Some(config) if !config.debug.log_level.trim().is_empty() => {
            config.debug.log_level.trim().to_string()
        }
        _ => DEFAULT_FILTER.to_string(),
    }
}

/// An `EnvFilter` built from [`DEFAULT_FILTER`].
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}

/// Path of the JSON log file inside `log_dir`.
pub fn log_file_path(log_dir: &Path) -> PathBuf {
    log_dir.join(LOG_FILE_NAME)
}

/// Creates `log_dir` if needed and truncates the log file inside it.
pub fn open_log_file(log_dir: &Path) -> std::io::Result<File> {
    std::fs::create_dir_all(log_dir)?;
    File::create(log_file_path(log_dir))
}

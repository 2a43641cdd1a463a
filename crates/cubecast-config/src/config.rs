//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use cubecast_math::Vec3f;
use cubecast_voxel::{MAX_FLAT_RADIUS, WorldPreset};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";

/// Top-level sandbox configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Initial world layout.
    pub world: WorldConfig,
    /// Block targeting settings.
    pub raycast: RaycastConfig,
    /// Fly camera settings.
    pub camera: CameraConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// World construction settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    /// Which initial world to build.
    pub preset: WorldPreset,
    /// Maximum number of chunks (`None` = unbounded).
    pub max_chunks: Option<usize>,
}

/// Block targeting settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RaycastConfig {
    /// How far the player can reach, in blocks.
    pub reach: f32,
}

/// Fly camera settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Starting eye position in world space.
    pub start_position: Vec3f,
    /// Starting yaw in degrees (-90 looks down -Z).
    pub start_yaw: f32,
    /// Starting pitch in degrees.
    pub start_pitch: f32,
    /// Movement speed in blocks per second.
    pub speed: f32,
    /// Degrees of rotation per unit of mouse movement.
    pub mouse_sensitivity: f32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Also write the JSON log file in release builds.
    pub log_to_file: bool,
}

// --- Default implementations ---

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            preset: WorldPreset::Reference,
            max_chunks: Some(4),
        }
    }
}

impl Default for RaycastConfig {
    fn default() -> Self {
        Self { reach: 3.0 }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            start_position: Vec3f::new(0.0, 20.0, 0.0),
            start_yaw: -90.0,
            start_pitch: 0.0,
            speed: 5.0,
            mouse_sensitivity: 0.1,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_to_file: false,
        }
    }
}

/// Default config directory: `<platform config dir>/cubecast`, or `./.cubecast`
/// when the platform has none.
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("cubecast"))
        .unwrap_or_else(|| PathBuf::from(".cubecast"))
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);
        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(config_dir.join(CONFIG_FILE), serialized)
            .map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read(&config_dir.join(CONFIG_FILE))?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    /// Checks ranges that RON cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let reach = self.raycast.reach;
        if !reach.is_finite() || reach < 0.0 {
            return Err(ConfigError::Invalid {
                field: "raycast.reach",
                reason: format!("must be a finite, non-negative distance (got {reach})"),
            });
        }
        if !self.camera.speed.is_finite() || self.camera.speed < 0.0 {
            return Err(ConfigError::Invalid {
                field: "camera.speed",
                reason: format!("must be finite and non-negative (got {})", self.camera.speed),
            });
        }
        let camera = &self.camera;
        let angles = [
            ("camera.mouse_sensitivity", camera.mouse_sensitivity),
            ("camera.start_yaw", camera.start_yaw),
            ("camera.start_pitch", camera.start_pitch),
        ];
        for (field, value) in angles {
            if !value.is_finite() {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be finite (got {value})"),
                });
            }
        }
        let start = camera.start_position;
        if !(start.x.is_finite() && start.y.is_finite() && start.z.is_finite()) {
            return Err(ConfigError::Invalid {
                field: "camera.start_position",
                reason: format!("must be finite (got {start})"),
            });
        }

        if self.world.max_chunks == Some(0) {
            return Err(ConfigError::Invalid {
                field: "world.max_chunks",
                reason: "a world needs room for at least one chunk".to_string(),
            });
        }
        if let WorldPreset::Flat { radius, .. } = self.world.preset
            && radius > MAX_FLAT_RADIUS
        {
            return Err(ConfigError::Invalid {
                field: "world.preset",
                reason: format!("flat radius {radius} exceeds {MAX_FLAT_RADIUS}"),
            });
        }
        let needed = self.world.preset.chunk_count();
        if let Some(limit) = self.world.max_chunks
            && needed > limit as u64
        {
            return Err(ConfigError::Invalid {
                field: "world.preset",
                reason: format!("needs {needed} chunks but world.max_chunks is {limit}"),
            });
        }
        Ok(())
    }

    fn read(config_path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(config_path).map_err(ConfigError::ReadError)?;
        let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
        config.validate()?;
        Ok(config)
    }
}

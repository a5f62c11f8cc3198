//! Configuration sections with their defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name used inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Terrain bounds and the root subdivision budget.
    pub terrain: TerrainSettings,
    /// How the LOD focus point moves.
    pub focus: FocusSettings,
    /// Where elevation data comes from.
    pub heightmap: HeightmapSettings,
    /// Frame pacing of the driver loop.
    pub frame: FrameSettings,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// World-space terrain rectangle and quadtree root budget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TerrainSettings {
    /// Terrain width in world units.
    pub width: f32,
    /// Terrain height (y extent) in world units.
    pub height: f32,
    /// X of the terrain's top-left corner.
    pub origin_x: f32,
    /// Y of the terrain's top-left corner. The terrain extends toward -y.
    pub origin_y: f32,
    /// Depth budget handed to the root node (0..=10).
    pub root_depth: u8,
}

impl Default for TerrainSettings {
    fn default() -> Self {
        Self {
            width: 10.0,
            height: 10.0,
            origin_x: -5.0,
            origin_y: 5.0,
            root_depth: 7,
        }
    }
}

/// Focus point movement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FocusSettings {
    /// Distance the focus travels along the patrol path per frame.
    pub patrol_step: f32,
    /// Move the focus automatically around the patrol path.
    pub auto_patrol: bool,
    /// Starting x; `None` starts at the patrol path's first corner.
    pub start_x: Option<f32>,
    /// Starting y; `None` starts at the patrol path's first corner.
    pub start_y: Option<f32>,
}

impl Default for FocusSettings {
    fn default() -> Self {
        Self {
            patrol_step: 0.1,
            auto_patrol: true,
            start_x: None,
            start_y: None,
        }
    }
}

/// Heightmap source. An image path wins; otherwise a noise heightmap is
/// generated from the remaining fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HeightmapSettings {
    /// Grayscale (or color, converted to luma) image to sample heights from.
    pub path: Option<PathBuf>,
    /// Seed for the generated heightmap.
    pub seed: u32,
    /// Side length in pixels of the generated heightmap.
    pub resolution: u32,
    /// Noise octaves of the generated heightmap.
    pub octaves: u32,
    /// Frequency of the first octave, in cycles across the whole map.
    pub base_frequency: f64,
    /// Amplitude multiplier between octaves.
    pub persistence: f64,
    /// Frequency multiplier between octaves.
    pub lacunarity: f64,
}

impl Default for HeightmapSettings {
    fn default() -> Self {
        Self {
            path: None,
            seed: 0,
            resolution: 256,
            octaves: 6,
            base_frequency: 4.0,
            persistence: 0.5,
            lacunarity: 2.0,
        }
    }
}

/// Frame loop pacing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FrameSettings {
    /// Frames per second (0 = as fast as possible).
    pub target_fps: u32,
    /// Frames to run before exiting (0 = until interrupted).
    pub frame_count: u64,
}

impl Default for FrameSettings {
    fn default() -> Self {
        Self {
            target_fps: 60,
            frame_count: 0,
        }
    }
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Emit per-frame tree statistics at debug level.
    pub log_frame_stats: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_frame_stats: true,
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or write a default one there.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

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
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::Write {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized = ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        std::fs::write(&config_path, serialized).map_err(|source| ConfigError::Write {
            path: config_path,
            source,
        })
    }

    /// Re-read the file: `Some(new_config)` if it differs from `self`.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read(&config_dir.join(CONFIG_FILE_NAME))?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

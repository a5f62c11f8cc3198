//! Configuration for the terrain LOD demo.
//!
//! Settings persist to disk as a RON file and can be overridden from the
//! command line. Every section falls back to its defaults when missing, so old
//! config files keep loading as new settings are added.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    Config, DebugConfig, FocusSettings, FrameSettings, HeightmapSettings, TerrainSettings,
};
pub use error::ConfigError;

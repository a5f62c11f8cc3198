//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Terrain LOD demo command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "terra-demo", about = "Adaptive quadtree terrain LOD demo")]
pub struct CliArgs {
    /// Depth budget of the quadtree root (0..=10).
    #[arg(long)]
    pub root_depth: Option<u8>,

    /// Focus patrol step per frame, in world units.
    #[arg(long)]
    pub patrol_step: Option<f32>,

    /// Heightmap image to sample elevations from.
    #[arg(long)]
    pub heightmap: Option<PathBuf>,

    /// Seed for the generated heightmap.
    #[arg(long)]
    pub seed: Option<u32>,

    /// Number of frames to run (0 = until interrupted).
    #[arg(long)]
    pub frames: Option<u64>,

    /// Target frames per second (0 = unpaced).
    #[arg(long)]
    pub fps: Option<u32>,

    /// Keep the focus still instead of patrolling.
    #[arg(long)]
    pub manual_focus: bool,

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
        if let Some(depth) = args.root_depth {
            self.terrain.root_depth = depth;
        }
        if let Some(step) = args.patrol_step {
            self.focus.patrol_step = step;
        }
        if let Some(ref path) = args.heightmap {
            self.heightmap.path = Some(path.clone());
        }
        if let Some(seed) = args.seed {
            self.heightmap.seed = seed;
        }
        if let Some(frames) = args.frames {
            self.frame.frame_count = frames;
        }
        if let Some(fps) = args.fps {
            self.frame.target_fps = fps;
        }
        if args.manual_focus {
            self.focus.auto_patrol = false;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

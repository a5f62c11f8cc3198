//! Headless driver for the adaptive quadtree terrain.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p terra-demo -- --frames 200` for one patrol lap, or
//! `RUST_LOG=debug` to see per-frame tree statistics.

mod frame;
mod setup;
mod stats_renderer;

use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use terra_config::{CliArgs, Config};
use terra_heightmap::HeightSampler;
use tracing::{debug, error, info};

use crate::frame::FrameDriver;
use crate::stats_renderer::StatsRenderer;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(|| {
        dirs::config_dir()
            .expect("Failed to resolve config directory")
            .join("terra")
    });

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    if let Err(e) = terra_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config)) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let terrain = match setup::terrain_config(&config) {
        Ok(terrain) => terrain,
        Err(err) => {
            error!(%err, "invalid terrain configuration");
            return ExitCode::FAILURE;
        }
    };
    let heightmap = match setup::heightmap(&config.heightmap) {
        Ok(heightmap) => heightmap,
        Err(err) => {
            error!(%err, "no usable heightmap");
            return ExitCode::FAILURE;
        }
    };
    info!(
        width = terrain.width(),
        height = terrain.height(),
        root_depth = terrain.root_depth(),
        heightmap_width = heightmap.width(),
        heightmap_height = heightmap.height(),
        auto_patrol = config.focus.auto_patrol,
        "terrain ready"
    );

    let focus = match setup::initial_focus(&config, &terrain) {
        Ok(focus) => focus,
        Err(err) => {
            error!(%err, "invalid focus start");
            return ExitCode::FAILURE;
        }
    };

    let mut driver = FrameDriver::new(terrain, heightmap);
    driver.set_focus(focus);
    driver.set_auto_patrol(config.focus.auto_patrol);

    let frame_budget = match config.frame.target_fps {
        0 => Duration::ZERO,
        fps => Duration::from_secs_f64(1.0 / fps as f64),
    };
    let frame_count = config.frame.frame_count;
    let mut renderer = StatsRenderer::default();
    let started = Instant::now();

    let mut frame = 0u64;
    while frame_count == 0 || frame < frame_count {
        let frame_start = Instant::now();
        let stats = match driver.run_frame(&mut renderer) {
            Ok(stats) => stats,
            Err(err) => {
                error!(frame, %err, "frame failed");
                return ExitCode::FAILURE;
            }
        };

        if config.debug.log_frame_stats {
            debug!(
                frame = stats.frame,
                focus_x = stats.focus_x,
                focus_y = stats.focus_y,
                leaves = stats.tree.leaves,
                nodes = stats.tree.nodes,
                max_level = stats.tree.max_level,
                vertices = stats.vertices,
                "frame"
            );
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame_budget {
            std::thread::sleep(frame_budget - elapsed);
        }
        frame += 1;
    }

    info!(
        frames = renderer.frames,
        mean_quads = renderer.mean_quads(),
        max_quads = renderer.max_quads,
        min_height = ?renderer.min_height,
        max_height = ?renderer.max_height,
        seconds = started.elapsed().as_secs_f64(),
        "done"
    );
    ExitCode::SUCCESS
}

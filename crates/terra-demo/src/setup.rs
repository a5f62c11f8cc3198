//! Turns loaded configuration into the runtime pieces of the demo.

use glam::Vec2;
use terra_config::{Config, HeightmapSettings};
use terra_heightmap::{
    FbmParams, GrayscaleHeightmap, HeightSampler, HeightmapError, generate_fbm_heightmap,
};
use terra_lod::{FocusState, LodError, TerrainConfig};

/// Validated terrain bounds from the `terrain` and `focus` sections.
pub fn terrain_config(config: &Config) -> Result<TerrainConfig, LodError> {
    let terrain = &config.terrain;
    TerrainConfig::new(
        terrain.width,
        terrain.height,
        Vec2::new(terrain.origin_x, terrain.origin_y),
        config.focus.patrol_step,
        terrain.root_depth,
    )
}

/// Starting focus: the configured point, or the patrol start.
pub fn initial_focus(config: &Config, terrain: &TerrainConfig) -> Result<FocusState, LodError> {
    let start = terrain.patrol_start();
    let focus = FocusState::new(
        config.focus.start_x.unwrap_or(start.x),
        config.focus.start_y.unwrap_or(start.y),
    );
    focus.validate()?;
    Ok(focus)
}

/// Open the configured heightmap image, or generate one if no image is set
/// or the image cannot be loaded.
pub fn heightmap(settings: &HeightmapSettings) -> Result<Box<dyn HeightSampler>, HeightmapError> {
    if let Some(path) = &settings.path {
        match GrayscaleHeightmap::open(path) {
            Ok(map) => return Ok(Box::new(map)),
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "falling back to generated heightmap");
            }
        }
    }
    let map = generate_fbm_heightmap(&fbm_params(settings))?;
    Ok(Box::new(map))
}

fn fbm_params(settings: &HeightmapSettings) -> FbmParams {
    FbmParams {
        seed: settings.seed,
        resolution: settings.resolution,
        octaves: settings.octaves,
        base_frequency: settings.base_frequency,
        lacunarity: settings.lacunarity,
        persistence: settings.persistence,
    }
}

//! Fractal Brownian motion (fBm) heightmap generator.
//!
//! Sums several octaves of simplex noise, each at twice the frequency and half
//! the amplitude of the previous one by default, and quantizes the result into
//! an 8-bit [`GrayscaleHeightmap`].

use noise::{NoiseFn, Simplex};

use crate::{GrayscaleHeightmap, HeightmapError};

/// Parameters for [`generate_fbm_heightmap`].
#[derive(Clone, Debug, PartialEq)]
pub struct FbmParams {
    /// Noise seed.
    pub seed: u32,
    /// Side length of the generated square heightmap in pixels.
    pub resolution: u32,
    /// Number of octaves to sum.
    pub octaves: u32,
    /// Frequency of the first octave, in cycles across the whole map.
    pub base_frequency: f64,
    /// Frequency multiplier between successive octaves.
    pub lacunarity: f64,
    /// Amplitude multiplier between successive octaves.
    pub persistence: f64,
}

impl Default for FbmParams {
    fn default() -> Self {
        Self {
            seed: 0,
            resolution: 256,
            octaves: 6,
            base_frequency: 4.0,
            lacunarity: 2.0,
            persistence: 0.5,
        }
    }
}

impl FbmParams {
    fn validate(&self) -> Result<(), HeightmapError> {
        if self.resolution == 0 {
            return Err(HeightmapError::InvalidParams(
                "resolution must be at least 1".to_string(),
            ));
        }
        if self.octaves == 0 {
            return Err(HeightmapError::InvalidParams(
                "octaves must be at least 1".to_string(),
            ));
        }
        for (name, value) in [
            ("base_frequency", self.base_frequency),
            ("lacunarity", self.lacunarity),
            ("persistence", self.persistence),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(HeightmapError::InvalidParams(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Geometric sum of all octave amplitudes (first octave amplitude 1).
    pub fn max_amplitude(&self) -> f64 {
        let mut sum = 0.0;
        let mut amp = 1.0;
        for _ in 0..self.octaves {
            sum += amp;
            amp *= self.persistence;
        }
        sum
    }
}

/// Generate a square heightmap from multi-octave simplex noise.
///
/// The same parameters always produce the same image.
pub fn generate_fbm_heightmap(params: &FbmParams) -> Result<GrayscaleHeightmap, HeightmapError> {
    params.validate()?;

    let noise = Simplex::new(params.seed);
    let max_amplitude = params.max_amplitude();
    let resolution = params.resolution as f64;

    let map = GrayscaleHeightmap::from_fn(params.resolution, params.resolution, |x, y| {
        let mut total = 0.0;
        let mut frequency = params.base_frequency;
        let mut amplitude = 1.0;

        for _ in 0..params.octaves {
            let nx = x as f64 / resolution * frequency;
            let ny = y as f64 / resolution * frequency;
            total += noise.get([nx, ny]) * amplitude;

            frequency *= params.lacunarity;
            amplitude *= params.persistence;
        }

        let normalized = (total / max_amplitude * 0.5 + 0.5).clamp(0.0, 1.0);
        (normalized * 255.0).round() as u8
    })?;

    tracing::debug!(
        seed = params.seed,
        resolution = params.resolution,
        octaves = params.octaves,
        "generated fBm heightmap"
    );
    Ok(map)
}

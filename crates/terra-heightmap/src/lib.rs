//! Elevation sources for terrain meshing.
//!
//! The mesh builder only needs to read an 8-bit elevation at integer pixel
//! indices, expressed by [`HeightSampler`]. Heightmaps come from image files
//! ([`GrayscaleHeightmap::open`]) or are generated from fractal noise
//! ([`generate_fbm_heightmap`]) when no image is available.

mod error;
mod fbm;
mod grayscale;

pub use error::HeightmapError;
pub use fbm::{FbmParams, generate_fbm_heightmap};
pub use grayscale::{FlatHeightmap, GrayscaleHeightmap};

/// A fixed-size 2D elevation map addressed by pixel indices.
///
/// Callers clamp `u` into `0..width()` and `v` into `0..height()` before
/// calling [`HeightSampler::sample`].
pub trait HeightSampler {
    /// Number of columns.
    fn width(&self) -> u32;

    /// Number of rows.
    fn height(&self) -> u32;

    /// Elevation at column `u`, row `v`, in `0..=255`.
    fn sample(&self, u: u32, v: u32) -> u8;
}

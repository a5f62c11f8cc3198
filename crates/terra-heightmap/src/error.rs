use thiserror::Error;

/// Errors returned while loading or generating a heightmap.
#[derive(Debug, Error)]
pub enum HeightmapError {
    /// The image file could not be opened or decoded.
    #[error("image load error: {0}")]
    ImageLoad(#[from] image::ImageError),

    /// The image has no pixels to sample.
    #[error("heightmap is empty ({width}x{height})")]
    Empty {
        /// Image width in pixels.
        width: u32,
        /// Image height in pixels.
        height: u32,
    },

    /// Generator parameters are out of range.
    #[error("invalid heightmap parameters: {0}")]
    InvalidParams(String),
}

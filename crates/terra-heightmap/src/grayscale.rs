//! Image-backed and constant heightmaps.

use std::path::Path;

use image::{GrayImage, Luma};

use crate::{HeightSampler, HeightmapError};

/// A heightmap stored as an 8-bit grayscale image.
///
/// Row 0 is the top edge of the terrain and column 0 the left edge.
#[derive(Clone, Debug)]
pub struct GrayscaleHeightmap {
    image: GrayImage,
}

impl GrayscaleHeightmap {
    /// Wrap an existing grayscale image.
    pub fn new(image: GrayImage) -> Result<Self, HeightmapError> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(HeightmapError::Empty { width, height });
        }
        Ok(Self { image })
    }

    /// Load an image file and convert it to luma.
    ///
    /// Color images are reduced to a single channel with the `image` crate's
    /// luma conversion.
    pub fn open(path: &Path) -> Result<Self, HeightmapError> {
        let image = image::open(path)?.to_luma8();
        tracing::info!(
            path = %path.display(),
            width = image.width(),
            height = image.height(),
            "loaded heightmap"
        );
        Self::new(image)
    }

    /// Build a heightmap by evaluating `f(column, row)` for every pixel.
    pub fn from_fn(
        width: u32,
        height: u32,
        mut f: impl FnMut(u32, u32) -> u8,
    ) -> Result<Self, HeightmapError> {
        Self::new(GrayImage::from_fn(width, height, |x, y| Luma([f(x, y)])))
    }

    /// The underlying image.
    pub fn image(&self) -> &GrayImage {
        &self.image
    }
}

impl HeightSampler for GrayscaleHeightmap {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    /// # Panics
    ///
    /// Panics if `(u, v)` lies outside the image.
    fn sample(&self, u: u32, v: u32) -> u8 {
        self.image.get_pixel(u, v).0[0]
    }
}

/// A heightmap with the same elevation everywhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlatHeightmap {
    /// Side length reported to callers.
    pub size: u32,
    /// Elevation returned for every pixel.
    pub value: u8,
}

impl HeightSampler for FlatHeightmap {
    fn width(&self) -> u32 {
        self.size
    }

    fn height(&self) -> u32 {
        self.size
    }

    fn sample(&self, u: u32, v: u32) -> u8 {
        debug_assert!(u < self.size && v < self.size);
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_image_rejected() {
        let err = GrayscaleHeightmap::new(GrayImage::new(0, 4)).unwrap_err();
        assert!(matches!(err, HeightmapError::Empty { width: 0, height: 4 }));
    }

    #[test]
    fn test_sample_reads_column_then_row() {
        let map = GrayscaleHeightmap::from_fn(4, 2, |x, y| (x * 10 + y) as u8).unwrap();
        assert_eq!(map.width(), 4);
        assert_eq!(map.height(), 2);
        assert_eq!(map.sample(3, 0), 30);
        assert_eq!(map.sample(0, 1), 1);
        assert_eq!(map.sample(2, 1), 21);
    }

    #[test]
    fn test_open_round_trips_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("heightmap.png");
        let source = GrayImage::from_fn(8, 8, |x, y| Luma([(x * 32 + y) as u8]));
        source.save(&path).unwrap();

        let map = GrayscaleHeightmap::open(&path).unwrap();
        assert_eq!(map.sample(7, 3), 7 * 32 + 3);
        assert_eq!(map.image(), &source);
    }

    #[test]
    fn test_open_missing_file_is_image_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = GrayscaleHeightmap::open(&dir.path().join("missing.png")).unwrap_err();
        assert!(matches!(err, HeightmapError::ImageLoad(_)));
    }

    #[test]
    fn test_flat_heightmap_is_constant() {
        let flat = FlatHeightmap { size: 16, value: 255 };
        assert_eq!(flat.sample(0, 0), 255);
        assert_eq!(flat.sample(15, 15), 255);
    }
}

//! Terrain bounds shared by the quadtree and the focus tracker.

use glam::Vec2;

use crate::quadtree::{MAX_DEPTH, Patch};
use crate::LodError;

/// Fixed terrain rectangle, patrol step, and root depth budget.
///
/// The terrain's top-left corner is `origin`; it spans `width` toward +x and
/// `height` toward -y. Validated on construction and read-only afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TerrainConfig {
    width: f32,
    height: f32,
    origin: Vec2,
    patrol_step: f32,
    root_depth: u8,
}

impl Default for TerrainConfig {
    /// A 10×10 terrain centred on the world origin, depth 7, step 0.1.
    fn default() -> Self {
        Self {
            width: 10.0,
            height: 10.0,
            origin: Vec2::new(-5.0, 5.0),
            patrol_step: 0.1,
            root_depth: 7,
        }
    }
}

impl TerrainConfig {
    /// Validate and build a terrain description.
    pub fn new(
        width: f32,
        height: f32,
        origin: Vec2,
        patrol_step: f32,
        root_depth: u8,
    ) -> Result<Self, LodError> {
        let root = Patch::new(origin.x, origin.y, width, height);
        root.validate()?;
        if root_depth > MAX_DEPTH {
            return Err(LodError::DepthTooLarge {
                depth: root_depth,
                max: MAX_DEPTH,
            });
        }

        let half = Vec2::new(width, height) * 0.5;
        let max_step = half.min_element();
        if !patrol_step.is_finite() || patrol_step <= 0.0 || patrol_step > max_step {
            return Err(LodError::InvalidStep {
                step: patrol_step,
                max_step,
            });
        }

        Ok(Self {
            width,
            height,
            origin,
            patrol_step,
            root_depth,
        })
    }

    /// Terrain width in world units.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Terrain height (y extent) in world units.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Top-left corner of the terrain.
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Distance the focus moves per tracker tick.
    pub fn patrol_step(&self) -> f32 {
        self.patrol_step
    }

    /// Depth budget given to the root node.
    pub fn root_depth(&self) -> u8 {
        self.root_depth
    }

    /// The rectangle covered by the quadtree root.
    pub fn root_patch(&self) -> Patch {
        Patch::new(self.origin.x, self.origin.y, self.width, self.height)
    }

    /// Top-left corner of the patrol path: halfway between the world origin
    /// and the terrain's top-left corner.
    pub fn patrol_start(&self) -> Vec2 {
        self.origin * 0.5
    }

    /// Side lengths of the patrol rectangle: half the terrain extent.
    pub fn patrol_extent(&self) -> Vec2 {
        Vec2::new(self.width, self.height) * 0.5
    }

    /// Copy with a different root depth budget.
    pub fn with_root_depth(self, root_depth: u8) -> Result<Self, LodError> {
        Self::new(
            self.width,
            self.height,
            self.origin,
            self.patrol_step,
            root_depth,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = TerrainConfig::default();
        let rebuilt = TerrainConfig::new(
            config.width(),
            config.height(),
            config.origin(),
            config.patrol_step(),
            config.root_depth(),
        );
        assert_eq!(rebuilt, Ok(config));
    }

    #[test]
    fn test_patrol_rectangle_for_reference_terrain() {
        let config = TerrainConfig::default();
        assert_eq!(config.patrol_start(), Vec2::new(-2.5, 2.5));
        assert_eq!(config.patrol_extent(), Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_root_patch_spans_terrain() {
        let patch = TerrainConfig::default().root_patch();
        assert_eq!(patch, Patch::new(-5.0, 5.0, 10.0, 10.0));
    }

    #[test]
    fn test_rejects_non_positive_extent() {
        let err = TerrainConfig::new(0.0, 10.0, Vec2::ZERO, 0.1, 3).unwrap_err();
        assert!(matches!(err, LodError::InvalidExtent { .. }));
        assert!(TerrainConfig::new(10.0, -1.0, Vec2::ZERO, 0.1, 3).is_err());
        assert!(TerrainConfig::new(f32::INFINITY, 1.0, Vec2::ZERO, 0.1, 3).is_err());
    }

    #[test]
    fn test_rejects_bad_origin() {
        let err = TerrainConfig::new(10.0, 10.0, Vec2::new(f32::NAN, 0.0), 0.1, 3).unwrap_err();
        assert!(matches!(err, LodError::InvalidOrigin { .. }));
    }

    #[test]
    fn test_rejects_depth_above_cap() {
        let err = TerrainConfig::default().with_root_depth(11).unwrap_err();
        assert_eq!(err, LodError::DepthTooLarge { depth: 11, max: 10 });
        assert!(TerrainConfig::default().with_root_depth(10).is_ok());
    }

    #[test]
    fn test_rejects_bad_step() {
        let origin = Vec2::new(-5.0, 5.0);
        assert!(TerrainConfig::new(10.0, 10.0, origin, 0.0, 3).is_err());
        assert!(TerrainConfig::new(10.0, 10.0, origin, -0.1, 3).is_err());
        // Longer than a patrol leg.
        assert!(TerrainConfig::new(10.0, 10.0, origin, 5.5, 3).is_err());
        assert!(TerrainConfig::new(10.0, 10.0, origin, 5.0, 3).is_ok());
    }
}

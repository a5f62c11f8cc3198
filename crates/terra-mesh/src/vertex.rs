//! GPU-ready terrain vertex.

use glam::{Vec2, Vec3};

/// One terrain mesh vertex: world position with height in `z`, plus texture
/// coordinates.
///
/// Layout (20 bytes total):
///   - `[0..12]`  position `[f32; 3]` (x, y, height)
///   - `[12..20]` uv `[f32; 2]`
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TerrainVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

static_assertions::assert_eq_size!(TerrainVertex, [u8; 20]);

impl TerrainVertex {
    pub fn new(position: Vec3, uv: Vec2) -> Self {
        Self {
            position: position.to_array(),
            uv: uv.to_array(),
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn uv(&self) -> Vec2 {
        Vec2::from_array(self.uv)
    }

    /// Elevation of this vertex.
    pub fn height(&self) -> f32 {
        self.position[2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_match_fields() {
        let v = TerrainVertex::new(Vec3::new(1.0, -2.0, 2.25), Vec2::new(0.5, 0.75));
        assert_eq!(v.position(), Vec3::new(1.0, -2.0, 2.25));
        assert_eq!(v.uv(), Vec2::new(0.5, 0.75));
        assert_eq!(v.height(), 2.25);
    }

    #[test]
    fn test_bytes_are_position_then_uv() {
        let v = TerrainVertex::new(Vec3::new(1.0, 2.0, 3.0), Vec2::new(4.0, 5.0));
        let floats: &[f32] = bytemuck::cast_slice(bytemuck::bytes_of(&v));
        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0, 5.0]);
    }
}

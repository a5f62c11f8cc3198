//! Headless renderer that only measures what it is asked to draw.

use terra_mesh::{TerrainRenderer, TerrainVertex};

/// Accumulates quad counts and the height range across frames.
#[derive(Clone, Debug, Default)]
pub struct StatsRenderer {
    pub frames: u64,
    pub quads: u64,
    pub max_quads: usize,
    pub min_height: Option<f32>,
    pub max_height: Option<f32>,
}

impl StatsRenderer {
    /// Mean quads per frame, zero before the first frame.
    pub fn mean_quads(&self) -> f64 {
        if self.frames == 0 {
            0.0
        } else {
            self.quads as f64 / self.frames as f64
        }
    }
}

impl TerrainRenderer for StatsRenderer {
    fn draw_quads(&mut self, vertices: &[TerrainVertex]) {
        let quads = vertices.len() / 4;
        self.frames += 1;
        self.quads += quads as u64;
        self.max_quads = self.max_quads.max(quads);

        for height in vertices.iter().map(TerrainVertex::height) {
            self.min_height = Some(self.min_height.map_or(height, |h| h.min(height)));
            self.max_height = Some(self.max_height.map_or(height, |h| h.max(height)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec2, Vec3};

    fn quad(height: f32) -> [TerrainVertex; 4] {
        [TerrainVertex::new(Vec3::new(0.0, 0.0, height), Vec2::ZERO); 4]
    }

    #[test]
    fn test_accumulates_across_frames() {
        let mut renderer = StatsRenderer::default();
        renderer.draw_quads(&quad(1.5));
        let two: Vec<_> = quad(2.0).into_iter().chain(quad(3.0)).collect();
        renderer.draw_quads(&two);

        assert_eq!(renderer.frames, 2);
        assert_eq!(renderer.quads, 3);
        assert_eq!(renderer.max_quads, 2);
        assert_eq!(renderer.min_height, Some(1.5));
        assert_eq!(renderer.max_height, Some(3.0));
        assert_eq!(renderer.mean_quads(), 1.5);
    }

    #[test]
    fn test_empty_renderer() {
        let renderer = StatsRenderer::default();
        assert_eq!(renderer.mean_quads(), 0.0);
        assert!(renderer.min_height.is_none());
    }
}

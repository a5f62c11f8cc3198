//! Seam between meshing and whatever draws the terrain.

use crate::TerrainVertex;

/// Consumes one frame's terrain vertices.
///
/// Vertices arrive as independent quads: each consecutive group of four is
/// top-left, top-right, bottom-left, bottom-right of one patch.
pub trait TerrainRenderer {
    fn draw_quads(&mut self, vertices: &[TerrainVertex]);
}

impl<R: TerrainRenderer + ?Sized> TerrainRenderer for &mut R {
    fn draw_quads(&mut self, vertices: &[TerrainVertex]) {
        (**self).draw_quads(vertices);
    }
}

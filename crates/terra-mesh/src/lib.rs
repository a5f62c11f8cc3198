//! Terrain meshing: flattens an LOD quadtree into a quad vertex buffer.

pub mod builder;
pub mod renderer;
pub mod vertex;
pub mod vertex_format;

pub use builder::{HEIGHT_BASE, HEIGHT_SCALE, MeshBuilder, TerrainMesh, height_from_sample};
pub use renderer::TerrainRenderer;
pub use vertex::TerrainVertex;
pub use vertex_format::{
    TERRAIN_VERTEX_ATTRIBUTES, TERRAIN_VERTEX_LAYOUT, terrain_vertex_buffer_layout,
};

//! Flattens a [`QuadTree`] into a quad vertex buffer.
//!
//! Every leaf becomes four vertices (top-left, top-right, bottom-left,
//! bottom-right) written in NW, NE, SW, SE depth-first order. The buffer is
//! sized from the tree's leaf count, which only exists once the tree is
//! built, so it can never be too small.

use glam::{Vec2, Vec3};
use terra_heightmap::HeightSampler;
use terra_lod::{NodeId, QuadTree, TerrainConfig};

use crate::TerrainVertex;

/// Height of an elevation sample of 0.
pub const HEIGHT_BASE: f32 = 1.5;

/// Height added by an elevation sample of 255.
pub const HEIGHT_SCALE: f32 = 1.5;

/// Map an 8-bit elevation into world height, `1.5..=3.0`.
pub fn height_from_sample(value: u8) -> f32 {
    value as f32 / 255.0 * HEIGHT_SCALE + HEIGHT_BASE
}

/// Vertices of one frame's terrain.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TerrainMesh {
    /// Quads as consecutive groups of four vertices.
    pub vertices: Vec<TerrainVertex>,
}

impl TerrainMesh {
    /// Four per quad.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Each group of four vertices is one quad.
    pub fn quad_count(&self) -> usize {
        self.vertices.len() / 4
    }

    /// The vertex buffer as raw bytes for upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Two counter-clockwise triangles per quad, for pipelines without quad
    /// primitives.
    pub fn triangle_indices(&self) -> Vec<u32> {
        (0..self.quad_count() as u32)
            .flat_map(|quad| {
                let base = quad * 4;
                [base, base + 2, base + 1, base + 1, base + 2, base + 3]
            })
            .collect()
    }
}

/// Walks quadtrees and writes their leaves as terrain vertices.
pub struct MeshBuilder<'a> {
    config: &'a TerrainConfig,
    sampler: &'a dyn HeightSampler,
}

impl<'a> MeshBuilder<'a> {
    /// Builder for terrain described by `config`, with heights read from
    /// `sampler`.
    pub fn new(config: &'a TerrainConfig, sampler: &'a dyn HeightSampler) -> Self {
        Self { config, sampler }
    }

    /// Mesh `tree` into a freshly allocated buffer.
    pub fn build(&self, tree: &QuadTree) -> TerrainMesh {
        let mut vertices = Vec::new();
        self.fill(tree, &mut vertices);
        TerrainMesh { vertices }
    }

    /// Mesh `tree` into `buffer`, replacing its contents but reusing its
    /// allocation.
    pub fn fill(&self, tree: &QuadTree, buffer: &mut Vec<TerrainVertex>) {
        buffer.clear();
        buffer.resize(tree.leaf_count() * 4, TerrainVertex::default());

        if let Some(root) = tree.root() {
            let written = self.traverse(tree, root, buffer, 0);
            assert_eq!(
                written,
                buffer.len(),
                "leaf count disagrees with the tree's leaves"
            );
        }
        tracing::trace!(vertices = buffer.len(), "meshed quadtree");
    }

    /// Write the subtree under `node` starting at `write_index`; returns the
    /// index after the last vertex written.
    ///
    /// # Panics
    ///
    /// Panics if `buffer` is shorter than four vertices per leaf below `node`.
    pub fn traverse(
        &self,
        tree: &QuadTree,
        node: NodeId,
        buffer: &mut [TerrainVertex],
        write_index: usize,
    ) -> usize {
        let quad = tree.node(node);
        match quad.children {
            Some(children) => children
                .into_iter()
                .fold(write_index, |index, child| {
                    self.traverse(tree, child, buffer, index)
                }),
            None => {
                let corners = quad.patch.corners();
                let uvs = quad.tex.corners();
                for (slot, (corner, uv)) in buffer[write_index..write_index + 4]
                    .iter_mut()
                    .zip(corners.into_iter().zip(uvs))
                {
                    *slot = TerrainVertex::new(self.lift(corner), uv);
                }
                write_index + 4
            }
        }
    }

    /// World height under `point`.
    ///
    /// The point's distance from the terrain's top-left corner, as a fraction
    /// of the terrain size, picks the heightmap pixel; indices outside the map
    /// are clamped to its edge.
    pub fn height_at(&self, point: Vec2) -> f32 {
        let origin = self.config.origin();
        let fraction = Vec2::new(
            (origin.x - point.x).abs() / self.config.width(),
            (origin.y - point.y).abs() / self.config.height(),
        );
        let u = pixel_index(self.sampler.width(), fraction.x);
        let v = pixel_index(self.sampler.height(), fraction.y);
        height_from_sample(self.sampler.sample(u, v))
    }

    /// World position of `point` lifted onto the terrain.
    pub fn lift(&self, point: Vec2) -> Vec3 {
        point.extend(self.height_at(point))
    }
}

fn pixel_index(size: u32, fraction: f32) -> u32 {
    let last = size.saturating_sub(1) as i64;
    ((size as f32 * fraction) as i64).clamp(0, last) as u32
}

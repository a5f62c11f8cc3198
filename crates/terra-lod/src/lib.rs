//! Focus-driven quadtree level of detail for a flat heightmap terrain.
//!
//! Each frame the [`FocusTracker`] moves the [`FocusState`], then a fresh
//! [`QuadTree`] is built over the terrain rectangle described by
//! [`TerrainConfig`]. Patches near the focus keep more of their depth budget
//! and subdivide further; distant patches terminate early as coarse leaves.

mod error;
mod focus;
mod quadtree;
mod terrain;

pub use error::LodError;
pub use focus::{FocusState, FocusTracker, PatrolBounds, PatrolLeg};
pub use quadtree::{
    MAX_DEPTH, NodeId, Patch, QuadNode, QuadTree, Quadrant, TexRect, TreeStats, child_depth,
    clamp_depth, distance_score,
};
pub use terrain::TerrainConfig;

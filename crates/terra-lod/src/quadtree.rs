//! Focus-driven LOD quadtree stored in a node arena.
//!
//! Nodes live in a flat `Vec` and refer to their children by [`NodeId`]. A
//! tree is rebuilt from scratch every frame; tearing it down is a single arena
//! reset, so no per-node release is needed.

use glam::Vec2;

use crate::{FocusState, LodError, TerrainConfig};

/// Hard cap on any node's depth budget.
pub const MAX_DEPTH: u8 = 10;

/// One of the four children of a subdivided patch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl Quadrant {
    /// Children in construction and traversal order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::NorthWest,
        Quadrant::NorthEast,
        Quadrant::SouthWest,
        Quadrant::SouthEast,
    ];

    /// Position within [`Quadrant::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    fn is_east(self) -> bool {
        matches!(self, Quadrant::NorthEast | Quadrant::SouthEast)
    }

    fn is_south(self) -> bool {
        matches!(self, Quadrant::SouthWest | Quadrant::SouthEast)
    }
}

/// An axis-aligned terrain rectangle.
///
/// `(x, y)` is the top-left corner. The patch spans `x..x + size_x` and
/// `y - size_y..y`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Patch {
    pub x: f32,
    pub y: f32,
    pub size_x: f32,
    pub size_y: f32,
}

impl Patch {
    /// Patch with top-left corner `(x, y)` and the given extent.
    pub fn new(x: f32, y: f32, size_x: f32, size_y: f32) -> Self {
        Self {
            x,
            y,
            size_x,
            size_y,
        }
    }

    /// The quarter-size child patch for `quadrant`.
    pub fn quadrant(&self, quadrant: Quadrant) -> Patch {
        let half_x = self.size_x / 2.0;
        let half_y = self.size_y / 2.0;
        Patch {
            x: if quadrant.is_east() { self.x + half_x } else { self.x },
            y: if quadrant.is_south() { self.y - half_y } else { self.y },
            size_x: half_x,
            size_y: half_y,
        }
    }

    /// Corners in emission order: top-left, top-right, bottom-left,
    /// bottom-right.
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.x, self.y),
            Vec2::new(self.x + self.size_x, self.y),
            Vec2::new(self.x, self.y - self.size_y),
            Vec2::new(self.x + self.size_x, self.y - self.size_y),
        ]
    }

    /// World-space area covered by the patch.
    pub fn area(&self) -> f32 {
        self.size_x * self.size_y
    }

    pub(crate) fn validate(&self) -> Result<(), LodError> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(LodError::InvalidOrigin {
                x: self.x,
                y: self.y,
            });
        }
        let valid = |size: f32| size.is_finite() && size > 0.0;
        if !valid(self.size_x) || !valid(self.size_y) {
            return Err(LodError::InvalidExtent {
                size_x: self.size_x,
                size_y: self.size_y,
            });
        }
        Ok(())
    }
}

/// Texture-space rectangle mirroring a [`Patch`]. `v` grows downward, so the
/// southern quadrants sit at larger `y`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TexRect {
    pub x: f32,
    pub y: f32,
    pub size_x: f32,
    pub size_y: f32,
}

impl TexRect {
    /// The whole texture, `(0, 0)` to `(1, 1)`.
    pub const FULL: TexRect = TexRect {
        x: 0.0,
        y: 0.0,
        size_x: 1.0,
        size_y: 1.0,
    };

    /// The quarter of this rectangle matching `quadrant`.
    pub fn quadrant(&self, quadrant: Quadrant) -> TexRect {
        let half_x = self.size_x / 2.0;
        let half_y = self.size_y / 2.0;
        TexRect {
            x: if quadrant.is_east() { self.x + half_x } else { self.x },
            y: if quadrant.is_south() { self.y + half_y } else { self.y },
            size_x: half_x,
            size_y: half_y,
        }
    }

    /// Texture coordinates matching [`Patch::corners`].
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.x, self.y),
            Vec2::new(self.x + self.size_x, self.y),
            Vec2::new(self.x, self.y + self.size_y),
            Vec2::new(self.x + self.size_x, self.y + self.size_y),
        ]
    }
}

/// Index of a node inside its [`QuadTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single patch of the tree.
#[derive(Clone, Debug, PartialEq)]
pub struct QuadNode {
    /// World-space rectangle.
    pub patch: Patch,
    /// Texture-space rectangle.
    pub tex: TexRect,
    /// Remaining depth budget. Zero for leaves.
    pub depth: u8,
    /// Distance from the root in tree levels.
    pub level: u8,
    /// NW, NE, SW, SE children; `None` for leaves.
    pub children: Option<[NodeId; 4]>,
}

impl QuadNode {
    /// Whether the node was left unsubdivided.
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }
}

/// Summary of a built tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Nodes in the arena, internal and leaf.
    pub nodes: usize,
    /// Leaves, one quad each.
    pub leaves: usize,
    /// Deepest level any leaf reached (root = 0).
    pub max_level: u8,
}

/// Clamp a raw depth budget into `0..=MAX_DEPTH`.
pub fn clamp_depth(budget: i32) -> u8 {
    budget.clamp(0, MAX_DEPTH as i32) as u8
}

/// Smallest distance from `focus` to one of the patch's four corners.
///
/// Each corner distance is truncated to an integer before taking the
/// minimum. This is not the point-to-rectangle distance: a focus inside a
/// large patch but far from every corner scores high.
pub fn distance_score(focus: Vec2, patch: &Patch) -> i32 {
    patch
        .corners()
        .into_iter()
        .map(|corner| corner.distance(focus) as i32)
        .min()
        .unwrap_or(0)
}

/// Depth budget of a child patch whose parent had `parent_depth`.
///
/// Loses one level plus half the (integer) distance score.
pub fn child_depth(parent_depth: u8, focus: Vec2, patch: &Patch) -> u8 {
    clamp_depth(parent_depth as i32 - 1 - distance_score(focus, patch) / 2)
}

/// LOD quadtree rebuilt once per frame around the current focus.
#[derive(Clone, Debug, Default)]
pub struct QuadTree {
    nodes: Vec<QuadNode>,
    root: Option<NodeId>,
    leaf_count: usize,
}

impl QuadTree {
    /// An empty tree with no allocation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree over the whole terrain with the full texture and the
    /// configured root depth.
    pub fn build(config: &TerrainConfig, focus: &FocusState) -> Result<Self, LodError> {
        let mut tree = Self::new();
        tree.rebuild(config, focus)?;
        Ok(tree)
    }

    /// Build a tree rooted at an arbitrary patch.
    pub fn build_patch(
        patch: Patch,
        tex: TexRect,
        depth: u8,
        focus: &FocusState,
    ) -> Result<Self, LodError> {
        let mut tree = Self::new();
        tree.rebuild_patch(patch, tex, depth, focus)?;
        Ok(tree)
    }

    /// Clear and rebuild over the whole terrain, reusing the arena.
    pub fn rebuild(&mut self, config: &TerrainConfig, focus: &FocusState) -> Result<(), LodError> {
        self.rebuild_patch(
            config.root_patch(),
            TexRect::FULL,
            config.root_depth(),
            focus,
        )
    }

    /// Clear and rebuild rooted at `patch`, reusing the arena.
    ///
    /// On error, including a non-finite focus, the tree is left empty.
    pub fn rebuild_patch(
        &mut self,
        patch: Patch,
        tex: TexRect,
        depth: u8,
        focus: &FocusState,
    ) -> Result<(), LodError> {
        self.clear();
        patch.validate()?;
        focus.validate()?;
        if depth > MAX_DEPTH {
            return Err(LodError::DepthTooLarge {
                depth,
                max: MAX_DEPTH,
            });
        }

        let (root, leaves) = self.insert(patch, tex, depth, 0, focus.xy());
        self.root = Some(root);
        self.leaf_count = leaves;

        tracing::trace!(
            nodes = self.nodes.len(),
            leaves,
            focus_x = focus.xy().x,
            focus_y = focus.xy().y,
            "rebuilt quadtree"
        );
        Ok(())
    }

    /// Push a node and, if it has budget left, its four subtrees. Returns the
    /// node and the number of leaves beneath it.
    fn insert(
        &mut self,
        patch: Patch,
        tex: TexRect,
        depth: u8,
        level: u8,
        focus: Vec2,
    ) -> (NodeId, usize) {
        debug_assert!(patch.size_x > 0.0 && patch.size_y > 0.0);
        debug_assert!(depth <= MAX_DEPTH);

        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(QuadNode {
            patch,
            tex,
            depth,
            level,
            children: None,
        });
        if depth == 0 {
            return (id, 1);
        }

        let mut leaves = 0;
        let children = Quadrant::ALL.map(|quadrant| {
            let child_patch = patch.quadrant(quadrant);
            let budget = child_depth(depth, focus, &child_patch);
            let (child, count) =
                self.insert(child_patch, tex.quadrant(quadrant), budget, level + 1, focus);
            leaves += count;
            child
        });
        self.nodes[id.index()].children = Some(children);
        (id, leaves)
    }

    /// Drop every node, keeping the allocation. Safe to call repeatedly.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.leaf_count = 0;
    }

    /// The root node, or `None` for an empty or cleared tree.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Look up a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to the current tree.
    pub fn node(&self, id: NodeId) -> &QuadNode {
        &self.nodes[id.index()]
    }

    /// Children of `id` in NW, NE, SW, SE order; `None` for a leaf.
    pub fn children(&self, id: NodeId) -> Option<[NodeId; 4]> {
        self.node(id).children
    }

    /// Leaves counted during the last build. Each one meshes to one quad.
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Nodes of every level, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// True until a build succeeds and again after [`QuadTree::clear`].
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Leaves in NW, NE, SW, SE depth-first order, the order they are meshed.
    pub fn leaves(&self) -> impl Iterator<Item = &QuadNode> + '_ {
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();
        std::iter::from_fn(move || {
            while let Some(id) = stack.pop() {
                let node = self.node(id);
                match node.children {
                    None => return Some(node),
                    Some(children) => stack.extend(children.iter().rev()),
                }
            }
            None
        })
    }

    /// Node and leaf counts plus the deepest leaf level, for logging.
    pub fn stats(&self) -> TreeStats {
        TreeStats {
            nodes: self.nodes.len(),
            leaves: self.leaf_count,
            max_level: self.leaves().map(|leaf| leaf.level).max().unwrap_or(0),
        }
    }
}

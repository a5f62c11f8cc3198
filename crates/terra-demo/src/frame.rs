//! Per-frame driver: move the focus, rebuild the tree, mesh it, draw it,
//! tear it down.

use terra_heightmap::HeightSampler;
use terra_lod::{FocusState, FocusTracker, LodError, QuadTree, TerrainConfig, TreeStats};
use terra_mesh::{MeshBuilder, TerrainRenderer, TerrainVertex};

/// What one frame produced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameStats {
    pub frame: u64,
    pub focus_x: f32,
    pub focus_y: f32,
    pub tree: TreeStats,
    pub vertices: usize,
}

/// Owns everything that lives across frames.
pub struct FrameDriver {
    config: TerrainConfig,
    focus: FocusState,
    tracker: FocusTracker,
    tree: QuadTree,
    vertices: Vec<TerrainVertex>,
    heightmap: Box<dyn HeightSampler>,
    frame: u64,
}

impl FrameDriver {
    /// A driver with the focus at the patrol start and the patrol running.
    pub fn new(config: TerrainConfig, heightmap: Box<dyn HeightSampler>) -> Self {
        Self {
            focus: FocusState::at_patrol_start(&config),
            config,
            tracker: FocusTracker::new(),
            tree: QuadTree::new(),
            vertices: Vec::new(),
            heightmap,
            frame: 0,
        }
    }

    pub fn focus(&self) -> FocusState {
        self.focus
    }

    /// Place the focus by hand.
    pub fn set_focus(&mut self, focus: FocusState) {
        self.focus = focus;
    }

    pub fn set_auto_patrol(&mut self, enabled: bool) {
        self.tracker.set_enabled(enabled);
    }

    pub fn config(&self) -> &TerrainConfig {
        &self.config
    }

    /// Run one frame and hand its vertices to `renderer`.
    ///
    /// Nothing is drawn if the tree cannot be rebuilt around the focus.
    pub fn run_frame(
        &mut self,
        renderer: &mut dyn TerrainRenderer,
    ) -> Result<FrameStats, LodError> {
        self.tracker.tick(&self.config, &mut self.focus);
        let focus = self.focus;
        self.tree.rebuild(&self.config, &focus)?;

        MeshBuilder::new(&self.config, self.heightmap.as_ref()).fill(&self.tree, &mut self.vertices);
        renderer.draw_quads(&self.vertices);

        let stats = FrameStats {
            frame: self.frame,
            focus_x: focus.xy().x,
            focus_y: focus.xy().y,
            tree: self.tree.stats(),
            vertices: self.vertices.len(),
        };
        self.tree.clear();
        self.frame += 1;
        Ok(stats)
    }
}

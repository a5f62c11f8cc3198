//! Tracker, quadtree, and mesh builder driven together frame by frame.

use glam::Vec2;
use terra_heightmap::{FbmParams, FlatHeightmap, HeightSampler, generate_fbm_heightmap};
use terra_lod::{FocusState, FocusTracker, QuadTree, TerrainConfig};
use terra_mesh::{HEIGHT_BASE, HEIGHT_SCALE, MeshBuilder, TerrainRenderer, TerrainVertex};

#[derive(Default)]
struct CountingRenderer {
    frames: usize,
    last_vertex_count: usize,
}

impl TerrainRenderer for CountingRenderer {
    fn draw_quads(&mut self, vertices: &[TerrainVertex]) {
        assert_eq!(vertices.len() % 4, 0);
        self.frames += 1;
        self.last_vertex_count = vertices.len();
    }
}

#[test]
fn test_depth_two_focus_at_centre_yields_sixteen_quads() {
    let config = TerrainConfig::new(10.0, 10.0, Vec2::new(-5.0, 5.0), 0.1, 2).unwrap();
    let focus = FocusState::new(0.0, 0.0);
    let heightmap = FlatHeightmap { size: 16, value: 0 };

    let tree = QuadTree::build(&config, &focus).unwrap();
    let root = tree.root().unwrap();
    for child in tree.children(root).unwrap() {
        let node = tree.node(child);
        assert_eq!((node.patch.size_x, node.patch.size_y), (5.0, 5.0));
        assert_eq!(node.depth, 1);
    }

    let mesh = MeshBuilder::new(&config, &heightmap).build(&tree);
    assert_eq!(tree.leaf_count(), 16);
    assert_eq!(mesh.vertex_count(), 64);
}

#[test]
fn test_one_patrol_lap_of_frames() {
    let config = TerrainConfig::default().with_root_depth(6).unwrap();
    let heightmap = generate_fbm_heightmap(&FbmParams {
        seed: 11,
        resolution: 64,
        ..Default::default()
    })
    .unwrap();
    assert_eq!(heightmap.width(), 64);

    let builder = MeshBuilder::new(&config, &heightmap);
    let mut focus = FocusState::at_patrol_start(&config);
    let mut tracker = FocusTracker::new();
    let mut tree = QuadTree::new();
    let mut buffer = Vec::new();
    let mut renderer = CountingRenderer::default();
    let start = focus.xy();

    let frames = FocusTracker::ticks_per_cycle(&config);
    for _ in 0..frames {
        tracker.tick(&config, &mut focus);
        tree.rebuild(&config, &focus).unwrap();
        builder.fill(&tree, &mut buffer);
        renderer.draw_quads(&buffer);

        assert_eq!(buffer.len(), tree.leaf_count() * 4);
        for vertex in &buffer {
            let [x, y, h] = vertex.position;
            assert!((-5.0..=5.0).contains(&x) && (-5.0..=5.0).contains(&y));
            assert!((HEIGHT_BASE..=HEIGHT_BASE + HEIGHT_SCALE).contains(&h));
        }
        tree.clear();
    }

    assert_eq!(renderer.frames, frames);
    assert!(renderer.last_vertex_count > 4);
    assert!((focus.xy() - start).length() < config.patrol_step());
}

#[test]
fn test_leaf_count_is_symmetric_around_the_patrol() {
    // The reference terrain is square and centred, so the four patrol corners
    // see mirrored trees with identical leaf counts.
    let config = TerrainConfig::default();
    let counts: Vec<_> = [(-2.5, 2.5), (2.5, 2.5), (2.5, -2.5), (-2.5, -2.5)]
        .into_iter()
        .map(|(x, y)| {
            QuadTree::build(&config, &FocusState::new(x, y))
                .unwrap()
                .leaf_count()
        })
        .collect();
    assert!(counts.windows(2).all(|w| w[0] == w[1]), "{counts:?}");
}

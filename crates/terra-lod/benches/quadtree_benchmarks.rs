use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use terra_lod::*;

fn bench_build_by_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_build");
    let focus = FocusState::new(-2.5, 2.5);
    for depth in [3u8, 5, 7, 9] {
        let config = TerrainConfig::default().with_root_depth(depth).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(depth), &config, |bencher, config| {
            bencher.iter(|| black_box(QuadTree::build(config, &focus).unwrap().leaf_count()))
        });
    }
    group.finish();
}

fn bench_rebuild_reusing_arena(c: &mut Criterion) {
    let config = TerrainConfig::default();
    let mut focus = FocusState::at_patrol_start(&config);
    let mut tracker = FocusTracker::new();
    let mut tree = QuadTree::new();
    c.bench_function("quadtree_rebuild_patrol_frame", |bencher| {
        bencher.iter(|| {
            tracker.tick(&config, &mut focus);
            tree.rebuild(&config, &focus).unwrap();
            black_box(tree.leaf_count())
        })
    });
}

fn bench_distance_score(c: &mut Criterion) {
    let patch = black_box(Patch::new(-5.0, 5.0, 2.5, 2.5));
    let focus = black_box(glam::Vec2::new(1.25, -0.5));
    c.bench_function("distance_score", |bencher| {
        bencher.iter(|| black_box(distance_score(focus, &patch)))
    });
}

criterion_group!(
    benches,
    bench_build_by_depth,
    bench_rebuild_reusing_arena,
    bench_distance_score,
);
criterion_main!(benches);

//! Search and rendering benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use indexed_tree::*;

fn benchmark_search(c: &mut Criterion) {
    let tree = IndexedTree::new(TreeConfig::new(16)).expect("tree builds");
    // Last slot: worst case for breadth-first, right-most leaf for depth-first
    let target = (tree.capacity() - 1).to_string();

    for strategy in SearchStrategy::ALL {
        c.bench_function(&format!("{strategy}_height=16"), |b| {
            b.iter(|| black_box(strategy.search(black_box(&tree), black_box(&target))));
        });
    }
}

fn benchmark_render(c: &mut Criterion) {
    let tree = IndexedTree::new(TreeConfig::default()).expect("tree builds");
    let renderer = Renderer::default();

    c.bench_function("render_height=4", |b| {
        b.iter(|| black_box(renderer.render(black_box(&tree))));
    });
}

criterion_group!(benches, benchmark_search, benchmark_render);
criterion_main!(benches);

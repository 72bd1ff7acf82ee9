//! Benchmark tests for the renderer

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tree_printer::{render, render_iterative, Node};

/// Build a complete tree with `fanout` children per node, `depth` levels deep
fn create_benchmark_tree(fanout: usize, depth: usize) -> Node {
    let children = if depth == 0 {
        Vec::new()
    } else {
        (0..fanout)
            .map(|_| create_benchmark_tree(fanout, depth - 1))
            .collect()
    };
    Node::new(format!("node-{}-{}", depth, fanout), children)
}

/// A single chain of `depth` nodes
fn create_chain(depth: usize) -> Node {
    let mut node = Node::leaf("leaf");
    for i in 0..depth {
        node = Node::new(format!("link{}", i), vec![node]);
    }
    node
}

fn benchmark_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for depth in [3, 5, 7].iter() {
        let tree = create_benchmark_tree(4, *depth);

        group.bench_with_input(BenchmarkId::new("recursive", depth), depth, |b, _| {
            b.iter(|| render(black_box(&tree)))
        });

        group.bench_with_input(BenchmarkId::new("iterative", depth), depth, |b, _| {
            b.iter(|| render_iterative(black_box(&tree)))
        });
    }

    group.finish();
}

fn benchmark_deep_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("deep_chain");

    for depth in [100, 500, 1000].iter() {
        let tree = create_chain(*depth);

        group.bench_with_input(BenchmarkId::new("recursive", depth), depth, |b, _| {
            b.iter(|| render(black_box(&tree)))
        });

        group.bench_with_input(BenchmarkId::new("iterative", depth), depth, |b, _| {
            b.iter(|| render_iterative(black_box(&tree)))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_render, benchmark_deep_chain);
criterion_main!(benches);

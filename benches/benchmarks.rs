//! Criterion benchmarks for relgraph.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use relgraph::{bfs, dfs, distances, shortest_path, to_adj_matrix, Graph};

/// Build a connected random graph: a spanning chain plus random weighted
/// edges.
fn make_large_graph(node_count: u32, extra_per_node: usize) -> Graph<u32> {
    let mut rng = StdRng::seed_from_u64(7);
    let mut graph = Graph::undirected();
    for i in 1..node_count {
        graph.add_weighted_edge(i - 1, i, rng.gen_range(1..10));
    }
    for i in 0..node_count {
        for _ in 0..extra_per_node {
            let target = rng.gen_range(0..node_count);
            if target != i {
                graph.add_weighted_edge(i, target, rng.gen_range(1..10));
            }
        }
    }
    graph
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("build_2k_nodes", |b| b.iter(|| make_large_graph(2_000, 4)));
}

fn bench_traversal(c: &mut Criterion) {
    let graph = make_large_graph(2_000, 4);
    c.bench_function("bfs_2k_nodes", |b| b.iter(|| bfs(&graph, 0)));
    c.bench_function("dfs_2k_nodes", |b| b.iter(|| dfs(&graph, 0)));
}

fn bench_shortest_path(c: &mut Criterion) {
    let graph = make_large_graph(2_000, 4);
    c.bench_function("distances_2k_nodes", |b| b.iter(|| distances(&graph, 0)));
    c.bench_function("shortest_path_2k_nodes", |b| {
        b.iter(|| shortest_path(&graph, 0, 1_999))
    });
}

fn bench_matrix(c: &mut Criterion) {
    let graph = make_large_graph(500, 4);
    c.bench_function("to_adj_matrix_500_nodes", |b| b.iter(|| to_adj_matrix(&graph)));
}

criterion_group!(
    benches,
    bench_build,
    bench_traversal,
    bench_shortest_path,
    bench_matrix
);
criterion_main!(benches);

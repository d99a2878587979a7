//! Criterion benchmarks for graphwalk.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

use graphwalk::format::GraphReader;
use graphwalk::graph::{Graph, TraversalKind};

/// Build a random graph with roughly `edges_per_vertex` edges per vertex.
fn make_large_graph(vertex_count: usize, edges_per_vertex: usize) -> Graph {
    let mut rng = rand::thread_rng();
    let mut graph = Graph::new(vertex_count).unwrap();
    for src in 0..vertex_count {
        for _ in 0..edges_per_vertex {
            let dest = rng.gen_range(0..vertex_count);
            graph.add_edge(src, dest).unwrap();
        }
    }
    graph
}

/// Build a path 0 - 1 - ... - (n - 1).
fn make_chain(vertex_count: usize) -> Graph {
    let mut graph = Graph::new(vertex_count).unwrap();
    for i in 0..vertex_count - 1 {
        graph.add_edge(i, i + 1).unwrap();
    }
    graph
}

fn bench_add_edge(c: &mut Criterion) {
    let mut graph = make_large_graph(10_000, 3);

    c.bench_function("add_edge_to_10k", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| {
            let src = rng.gen_range(0..10_000);
            let dest = rng.gen_range(0..10_000);
            let _ = graph.add_edge(src, dest);
        })
    });
}

fn bench_dfs_100k(c: &mut Criterion) {
    let mut graph = make_large_graph(100_000, 3);
    let start = graph.vertex(50_000).unwrap();

    c.bench_function("dfs_100k", |b| {
        b.iter(|| black_box(graph.traverse(TraversalKind::Dfs, start)))
    });
}

fn bench_bfs_100k(c: &mut Criterion) {
    let mut graph = make_large_graph(100_000, 3);
    let start = graph.vertex(50_000).unwrap();

    c.bench_function("bfs_100k", |b| {
        b.iter(|| black_box(graph.traverse(TraversalKind::Bfs, start)))
    });
}

fn bench_dfs_chain_1m(c: &mut Criterion) {
    let mut graph = make_chain(1_000_000);
    let start = graph.vertex(0).unwrap();

    c.bench_function("dfs_chain_1m", |b| {
        b.iter(|| black_box(graph.traverse(TraversalKind::Dfs, start)))
    });
}

fn bench_parse_10k(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let vertex_count = 10_000;
    let edge_count = 30_000;
    let mut text = format!("{} {}\n", vertex_count, edge_count);
    for _ in 0..edge_count {
        text.push_str(&format!(
            "{} {}\n",
            rng.gen_range(0..vertex_count),
            rng.gen_range(0..vertex_count)
        ));
    }

    c.bench_function("parse_10k", |b| {
        b.iter(|| black_box(GraphReader::parse(&text).unwrap()))
    });
}

criterion_group!(
    benches,
    bench_add_edge,
    bench_dfs_100k,
    bench_bfs_100k,
    bench_dfs_chain_1m,
    bench_parse_10k,
);
criterion_main!(benches);

//! Benchmarks for the core graph algorithms
//!
//! Run with: cargo bench -p vertexa-algorithms

use std::hint::black_box;
use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vertexa_algorithms::{
    DynamicWeightShortestPath, LinearGrowth, dijkstra, greedy_coloring, kruskal, solve_tsp,
    strongly_connected_components,
};
use vertexa_core::{DirectedGraph, Graph, UndirectedGraph};

// ============================================================================
// Synthetic graphs
// ============================================================================

/// A `side x side` grid with edges to the right and downward neighbors.
fn grid(side: usize) -> DirectedGraph<u32> {
    let mut graph = DirectedGraph::new(side * side);
    for row in 0..side {
        for col in 0..side {
            let v = row * side + col;
            let weight = u32::try_from((row * 7 + col * 3) % 10 + 1).unwrap_or(1);
            if col + 1 < side {
                graph.add_edge(v, v + 1, weight).unwrap();
            }
            if row + 1 < side {
                graph.add_edge(v, v + side, weight).unwrap();
            }
        }
    }
    graph
}

fn random_directed(n: usize, edges: usize, seed: u64) -> DirectedGraph<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = DirectedGraph::new(n);
    for _ in 0..edges {
        let from = rng.gen_range(0..n);
        let to = rng.gen_range(0..n);
        graph.add_edge(from, to, rng.gen_range(1..100)).unwrap();
    }
    graph
}

fn random_undirected(n: usize, edges: usize, seed: u64) -> UndirectedGraph<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = UndirectedGraph::new(n);
    for _ in 0..edges {
        let from = rng.gen_range(0..n);
        let to = rng.gen_range(0..n);
        graph.add_edge(from, to, rng.gen_range(1..100)).unwrap();
    }
    graph
}

fn complete(n: usize, seed: u64) -> UndirectedGraph<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = UndirectedGraph::new(n);
    for u in 0..n {
        for v in (u + 1)..n {
            graph.add_edge(u, v, rng.gen_range(1..50)).unwrap();
        }
    }
    graph
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_dijkstra_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra_grid");

    for side in [10, 50, 100] {
        let graph = grid(side);

        group.throughput(Throughput::Elements((side * side) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(side * side), &graph, |b, graph| {
            b.iter(|| black_box(dijkstra(graph, 0).unwrap().len()));
        });
    }

    group.finish();
}

fn bench_dynamic_dijkstra(c: &mut Criterion) {
    let graph = grid(50);
    let solver = DynamicWeightShortestPath::new(LinearGrowth::new(0.1));

    c.bench_function("dynamic_dijkstra_grid_2500", |b| {
        b.iter(|| {
            let result = solver.dijkstra_at(&graph, 0, Duration::from_secs(3)).unwrap();
            black_box(result.len())
        });
    });
}

fn bench_kruskal(c: &mut Criterion) {
    let mut group = c.benchmark_group("kruskal");

    for (nodes, edges) in [(100, 500), (1000, 5000), (5000, 25000)] {
        let graph = random_undirected(nodes, edges, 42);

        group.throughput(Throughput::Elements(edges as u64));
        group.bench_with_input(
            BenchmarkId::new("nodes", format!("{nodes}_edges_{edges}")),
            &graph,
            |b, graph| b.iter(|| black_box(kruskal(graph).edge_count())),
        );
    }

    group.finish();
}

fn bench_scc(c: &mut Criterion) {
    let mut group = c.benchmark_group("scc");

    for (nodes, edges) in [(100, 300), (1000, 3000), (10000, 30000)] {
        let graph = random_directed(nodes, edges, 7);

        group.throughput(Throughput::Elements(nodes as u64));
        group.bench_with_input(
            BenchmarkId::new("nodes", format!("{nodes}_edges_{edges}")),
            &graph,
            |b, graph| b.iter(|| black_box(strongly_connected_components(graph).len())),
        );
    }

    group.finish();
}

fn bench_coloring(c: &mut Criterion) {
    let graph = random_undirected(2000, 10000, 11);

    c.bench_function("greedy_coloring_2000", |b| {
        b.iter(|| black_box(greedy_coloring(&graph).unwrap().color_count));
    });
}

fn bench_tsp(c: &mut Criterion) {
    let mut group = c.benchmark_group("tsp_complete");
    group.sample_size(20);

    for n in [6, 9, 12] {
        let graph = complete(n, 3);

        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, graph| {
            b.iter(|| black_box(solve_tsp(graph, 0..n).unwrap().cost));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_dijkstra_grid,
    bench_dynamic_dijkstra,
    bench_kruskal,
    bench_scc,
    bench_coloring,
    bench_tsp,
);
criterion_main!(benches);

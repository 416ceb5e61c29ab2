use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use dijkstra_path::graph::generators::{grid_matrix, random_undirected_matrix};
use dijkstra_path::UniformCostSearch;

fn random_matrices(c: &mut Criterion) {
    let mut group = c.benchmark_group("Random matrix search");
    let search = UniformCostSearch::new();

    for size in [50usize, 200, 800] {
        let mut rng = StdRng::seed_from_u64(size as u64);
        let graph = random_undirected_matrix(&mut rng, size, 0.05, 100);

        group.bench_with_input(BenchmarkId::from_parameter(size), &graph, |b, graph| {
            b.iter(|| search.search(graph, black_box(0), black_box(size - 1)))
        });
    }
    group.finish();
}

fn grid_corner_to_corner(c: &mut Criterion) {
    let mut group = c.benchmark_group("Grid search and reconstruction");
    let search = UniformCostSearch::new();

    for side in [10usize, 30] {
        let graph = grid_matrix(side, side);
        let destination = side * side - 1;

        group.bench_with_input(BenchmarkId::from_parameter(side), &graph, |b, graph| {
            b.iter(|| {
                let outcome = search.search(graph, 0, black_box(destination))?;
                outcome.path(graph)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, random_matrices, grid_corner_to_corner);
criterion_main!(benches);

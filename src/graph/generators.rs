use crate::graph::{DirectedGraph, WeightMatrix};
use rand::prelude::*;

/// Generates an undirected graph where each pair of distinct vertices is
/// connected with probability `edge_probability`, with weights in `1..=max_weight`
pub fn random_undirected_matrix<R>(
    rng: &mut R,
    n: usize,
    edge_probability: f64,
    max_weight: u64,
) -> WeightMatrix<u64>
where
    R: Rng + ?Sized,
{
    assert!(max_weight > 0, "max_weight must be positive");
    assert!(
        (0.0..=1.0).contains(&edge_probability),
        "edge_probability must be within [0, 1]"
    );

    // Upper triangle, mirrored below
    let mut upper = vec![0u64; n * n];
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.gen_bool(edge_probability) {
                upper[i * n + j] = rng.gen_range(1..=max_weight);
            }
        }
    }

    WeightMatrix::from_fn(n, |from, to| {
        if from < to {
            upper[from * n + to]
        } else {
            upper[to * n + from]
        }
    })
}

/// Generates a directed graph with approximately `edge_factor * n` edges
/// and weights in `1..=max_weight`
pub fn random_directed_graph<R>(
    rng: &mut R,
    n: usize,
    edge_factor: f64,
    max_weight: u64,
) -> DirectedGraph<u64>
where
    R: Rng + ?Sized,
{
    assert!(max_weight > 0, "max_weight must be positive");

    let mut graph = DirectedGraph::with_capacity(n);
    if n < 2 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        // Avoid self-loops
        if u != v {
            graph.add_edge(u, v, rng.gen_range(1..=max_weight));
        }
    }

    graph
}

/// Generates a `width * height` 4-connected grid with unit weights.
/// Vertex `(x, y)` has ID `y * width + x`.
pub fn grid_matrix(width: usize, height: usize) -> WeightMatrix<u64> {
    WeightMatrix::from_fn(width * height, |from, to| {
        let (fx, fy) = (from % width, from / width);
        let (tx, ty) = (to % width, to / width);
        if fx.abs_diff(tx) + fy.abs_diff(ty) == 1 {
            1
        } else {
            0
        }
    })
}

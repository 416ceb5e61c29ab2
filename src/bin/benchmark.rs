use std::time::{Duration, Instant};

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use dijkstra_path::graph::generators::{random_directed_graph, random_undirected_matrix};
use dijkstra_path::{Graph, PathSearch, UniformCostSearch};

// Function to benchmark a search on a graph over a batch of random queries
fn benchmark_search<A, G>(name: &str, algorithm: &A, graph: &G, queries: &[(usize, usize)]) -> Duration
where
    A: PathSearch<u64, G>,
    G: Graph<u64>,
{
    println!(
        "Running {} on {} with {} vertices and {} edges...",
        algorithm.name(),
        name,
        graph.vertex_count(),
        graph.edge_count()
    );

    let mut reached = 0;
    let mut expansions = 0;
    let start = Instant::now();
    for &(source, destination) in queries {
        match algorithm.search(graph, source, destination) {
            Ok(outcome) => {
                expansions += outcome.expansions;
                if outcome.is_success() {
                    reached += 1;
                }
            }
            Err(e) => log::error!("Query {} -> {} failed: {}", source, destination, e),
        }
    }
    let duration = start.elapsed();

    println!(
        "  - Reached {}/{} destinations with {} expansions in {:?}",
        reached,
        queries.len(),
        expansions,
        duration
    );

    duration
}

fn random_queries(rng: &mut StdRng, n: usize, count: usize) -> Vec<(usize, usize)> {
    (0..count)
        .map(|_| (rng.gen_range(0..n), rng.gen_range(0..n)))
        .collect()
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Dense matrices grow quadratically, keep them small
    let matrix_sizes = vec![100, 500, 1_000, 2_000];
    // Adjacency lists handle larger graphs
    let directed_sizes = vec![1_000, 10_000, 100_000];

    let edge_probability = 0.01;
    let edge_factor = 4.0;
    let queries_per_graph = 20;
    let seed = 42;

    println!("=====================================================");
    println!("Benchmark: uniform-cost search");
    println!("Matrix edge probability: {}", edge_probability);
    println!("Directed edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let search = UniformCostSearch::new();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut results = Vec::new();

    for &size in &matrix_sizes {
        info!("Generating {}x{} weight matrix", size, size);
        let graph = random_undirected_matrix(&mut rng, size, edge_probability, 100);
        let queries = random_queries(&mut rng, size, queries_per_graph);
        let time = benchmark_search("weight matrix", &search, &graph, &queries);
        results.push(("matrix", size, time));
    }

    for &size in &directed_sizes {
        info!("Generating directed graph with {} vertices", size);
        let graph = random_directed_graph(&mut rng, size, edge_factor, 100);
        let queries = random_queries(&mut rng, size, queries_per_graph);
        let time = benchmark_search("directed graph", &search, &graph, &queries);
        results.push(("directed", size, time));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<10} | {:<15} | {:<15}", "Graph", "Vertices", "Total (ms)", "Per query (ms)");
    println!("-----------------------------------------------------");

    for (kind, size, time) in &results {
        println!(
            "{:<10} | {:<10} | {:<15} | {:<15.3}",
            kind,
            size,
            time.as_millis(),
            time.as_secs_f64() * 1_000.0 / queries_per_graph as f64
        );
    }
}

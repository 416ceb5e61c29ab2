use dijkstra_path::graph::generators::{grid_matrix, random_directed_graph, random_undirected_matrix};
use dijkstra_path::{Graph, SearchStatus, TraceEdge, UniformCostSearch};
use rand::rngs::StdRng;
use rand::SeedableRng;

// Test helper: all-pairs distances by Floyd-Warshall
fn floyd_warshall<G: Graph<u64>>(graph: &G) -> Vec<Vec<Option<u64>>> {
    let n = graph.vertex_count();
    let mut dist = vec![vec![None; n]; n];

    for v in 0..n {
        dist[v][v] = Some(0);
        for (to, weight) in graph.successors(v) {
            if to != v {
                dist[v][to] = Some(dist[v][to].map_or(weight, |d: u64| d.min(weight)));
            }
        }
    }

    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if let (Some(a), Some(b)) = (dist[i][k], dist[k][j]) {
                    if dist[i][j].map_or(true, |d| a + b < d) {
                        dist[i][j] = Some(a + b);
                    }
                }
            }
        }
    }

    dist
}

// Test helper: checks the trace is made of real edges and adds up along every suffix
fn assert_trace_consistent<G: Graph<u64>>(
    graph: &G,
    costs: &[Option<u64>],
    source: usize,
    destination: usize,
    trace: &[TraceEdge<u64>],
) {
    let destination_cost = costs[destination].unwrap();
    let mut expected_to = destination;
    let mut walked = 0;

    for edge in trace {
        assert_eq!(edge.to, expected_to, "trace is not contiguous");
        assert_eq!(graph.edge_weight(edge.from, edge.to), Some(edge.weight));
        walked += edge.weight;
        // cost[destination] == cost[v] + weight of the traced path from v
        assert_eq!(costs[edge.from].unwrap() + walked, destination_cost);
        expected_to = edge.from;
    }

    assert_eq!(expected_to, source, "trace must end at the source");
}

#[test]
fn test_random_undirected_matches_floyd_warshall() {
    let search = UniformCostSearch::new();

    for seed in 0..40u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let n = 1 + (seed as usize % 9);
        let graph = random_undirected_matrix(&mut rng, n, 0.4, 20);
        let reference = floyd_warshall(&graph);

        for source in 0..n {
            for destination in 0..n {
                let outcome = search.search(&graph, source, destination).unwrap();
                assert_eq!(
                    outcome.destination_cost(),
                    reference[source][destination],
                    "seed {} query {} -> {}",
                    seed,
                    source,
                    destination
                );

                match reference[source][destination] {
                    Some(_) => {
                        let trace = outcome.path(&graph).unwrap();
                        assert_trace_consistent(&graph, &outcome.costs, source, destination, &trace);
                    }
                    None => {
                        assert_eq!(outcome.status, SearchStatus::Unreachable);
                        assert!(outcome.path(&graph).is_err());
                    }
                }
            }
        }
    }
}

#[test]
fn test_random_directed_matches_floyd_warshall() {
    let search = UniformCostSearch::new();

    for seed in 0..25u64 {
        let mut rng = StdRng::seed_from_u64(1_000 + seed);
        let n = 2 + (seed as usize % 8);
        let graph = random_directed_graph(&mut rng, n, 2.0, 15);
        let reference = floyd_warshall(&graph);

        for source in 0..n {
            let explored = search.explore(&graph, source).unwrap();

            for destination in 0..n {
                let expected = reference[source][destination];
                assert_eq!(explored.closed.cost_of(destination), expected);

                let outcome = search.search(&graph, source, destination).unwrap();
                assert_eq!(outcome.destination_cost(), expected);

                if expected.is_some() {
                    let trace = outcome.path(&graph).unwrap();
                    assert_trace_consistent(&graph, &outcome.costs, source, destination, &trace);
                }
            }
        }
    }
}

#[test]
fn test_grid_manhattan_distances() {
    let (width, height) = (6, 4);
    let graph = grid_matrix(width, height);
    let outcome = UniformCostSearch::new().explore(&graph, 0).unwrap();

    assert_eq!(outcome.closed.len(), width * height);
    for record in outcome.closed.iter() {
        let (x, y) = (record.id % width, record.id / width);
        assert_eq!(record.cost, (x + y) as u64);
    }

    // Finalization order never goes back to a cheaper vertex
    let costs: Vec<u64> = outcome.closed.iter().map(|record| record.cost).collect();
    assert!(costs.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn test_expansions_bounded_by_vertex_count() {
    let mut rng = StdRng::seed_from_u64(99);
    let graph = random_undirected_matrix(&mut rng, 60, 0.1, 50);
    let search = UniformCostSearch::new();

    for destination in 0..60 {
        let outcome = search.search(&graph, 0, destination).unwrap();
        assert!(outcome.expansions <= graph.vertex_count());
        assert_eq!(outcome.expansions, outcome.closed.len());
    }
}

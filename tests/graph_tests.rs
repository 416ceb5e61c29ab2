use dijkstra_path::graph::generators::{grid_matrix, random_directed_graph, random_undirected_matrix};
use dijkstra_path::{DirectedGraph, Error, Graph, WeightMatrix};
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_matrix_successors_and_predecessors() {
    // 0 -> 1 [2], 1 -> 2 [3], 2 -> 1 [4]
    let graph = WeightMatrix::from_rows(vec![
        vec![0u32, 2, 0],
        vec![0, 0, 3],
        vec![0, 4, 0],
    ])
    .unwrap();

    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.successors(1).collect::<Vec<_>>(), vec![(2, 3)]);
    assert_eq!(graph.predecessors(1).collect::<Vec<_>>(), vec![(0, 2), (2, 4)]);
    assert_eq!(graph.successors(0).collect::<Vec<_>>(), vec![(1, 2)]);
    assert_eq!(graph.predecessors(0).count(), 0);
    assert_eq!(graph.successors(3).count(), 0);

    assert_eq!(graph.edge_weight(2, 1), Some(4));
    assert_eq!(graph.edge_weight(1, 0), None);
    assert!(graph.has_edge(0, 1));
    assert!(!graph.has_vertex(3));
    assert!(!graph.is_symmetric());
    assert_eq!(graph.first_asymmetry(), Some((0, 1)));
}

#[test]
fn test_matrix_rejects_non_square_rows() {
    let result = WeightMatrix::from_rows(vec![vec![0u32, 1], vec![1]]);
    assert!(matches!(
        result,
        Err(Error::NotSquare { row: 1, len: 1, expected: 2 })
    ));

    let result = WeightMatrix::from_rows(vec![vec![0u32, 1, 0]]);
    assert!(matches!(result, Err(Error::NotSquare { row: 0, len: 3, expected: 1 })));
}

#[test]
fn test_matrix_edges() {
    let mut graph = WeightMatrix::from_edges(3, &[(0, 2, 5u32)]).unwrap();
    assert_eq!(graph.get(0, 2), Some(5));
    assert_eq!(graph.get(2, 0), Some(5));
    assert_eq!(graph.get(0, 1), Some(0));
    assert_eq!(graph.get(0, 3), None);
    assert!(graph.is_symmetric());

    assert!(matches!(graph.connect(0, 3, 1), Err(Error::InvalidVertex(3))));
    assert!(matches!(WeightMatrix::from_edges(2, &[(4, 0, 1u32)]), Err(Error::InvalidVertex(4))));

    // Zero removes an edge
    graph.set_edge(0, 2, 0).unwrap();
    assert!(!graph.has_edge(0, 2));
    assert!(graph.has_edge(2, 0));

    let rows: Vec<Vec<u32>> = graph.rows().map(|row| row.to_vec()).collect();
    assert_eq!(rows, vec![vec![0, 0, 0], vec![0, 0, 0], vec![5, 0, 0]]);
}

#[test]
fn test_matrix_from_json() {
    let plain: WeightMatrix<u64> = WeightMatrix::from_json_str("[[0, 3], [3, 0]]").unwrap();
    assert_eq!(plain.edge_weight(0, 1), Some(3));

    let wrapped: WeightMatrix<u64> =
        WeightMatrix::from_json_str(r#"{ "weights": [[0, 3], [3, 0]] }"#).unwrap();
    assert_eq!(plain, wrapped);

    let float: WeightMatrix<OrderedFloat<f64>> =
        WeightMatrix::from_json_str("[[0, 0.5], [0.5, 0]]").unwrap();
    assert_eq!(float.edge_weight(1, 0), Some(OrderedFloat(0.5)));

    assert!(matches!(
        WeightMatrix::<u64>::from_json_str("[[0, 1], [1]]"),
        Err(Error::NotSquare { .. })
    ));
    assert!(matches!(
        WeightMatrix::<u64>::from_json_str("[[0, -1], [1, 0]]"),
        Err(Error::Json(_))
    ));
    assert!(matches!(WeightMatrix::<u64>::from_json_str("not json"), Err(Error::Json(_))));
}

#[test]
fn test_directed_graph_edges() {
    let mut graph: DirectedGraph<u32> = DirectedGraph::new();
    for _ in 0..3 {
        graph.add_vertex();
    }

    assert!(graph.add_edge(0, 1, 4));
    assert!(graph.add_edge(2, 1, 1));
    assert!(!graph.add_edge(0, 5, 1));

    // Replaces the weight in both indexes
    assert!(graph.add_edge(0, 1, 2));
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.edge_weight(0, 1), Some(2));
    assert_eq!(graph.predecessors(1).collect::<Vec<_>>(), vec![(0, 2), (2, 1)]);
    assert_eq!(graph.successors(1).count(), 0);

    // Zero is a real edge in adjacency lists
    assert!(graph.add_edge(0, 2, 0));
    assert_eq!(graph.edge_weight(0, 2), Some(0));
    assert!(graph.has_edge(0, 2));
    assert_eq!(graph.edge_count(), 3);

    assert!(graph.add_undirected_edge(1, 2, 3));
    assert_eq!(graph.edge_weight(1, 2), Some(3));
    assert_eq!(graph.edge_weight(2, 1), Some(3));
}

#[test]
fn test_directed_graph_rejects_negative_weights() {
    let mut graph: DirectedGraph<i64> = DirectedGraph::with_capacity(2);
    assert!(!graph.add_edge(0, 1, -3));
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_generators() {
    let mut rng = StdRng::seed_from_u64(7);

    let matrix = random_undirected_matrix(&mut rng, 12, 0.3, 9);
    assert_eq!(matrix.vertex_count(), 12);
    assert!(matrix.is_symmetric());
    for v in 0..12 {
        assert!(!matrix.has_edge(v, v));
        assert!(matrix.successors(v).all(|(_, weight)| (1..=9).contains(&weight)));
    }

    let directed = random_directed_graph(&mut rng, 50, 3.0, 5);
    assert_eq!(directed.vertex_count(), 50);
    assert!(directed.edge_count() <= 150);
    for v in 0..50 {
        assert!(directed.successors(v).all(|(to, weight)| to != v && (1..=5).contains(&weight)));
    }

    let grid = grid_matrix(3, 2);
    assert_eq!(grid.vertex_count(), 6);
    // 4 horizontal and 3 vertical edges, both directions
    assert_eq!(grid.edge_count(), 14);
    assert_eq!(grid.successors(4).map(|(to, _)| to).collect::<Vec<_>>(), vec![1, 3, 5]);
}

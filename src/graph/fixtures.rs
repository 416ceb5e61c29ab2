//! Reference graphs with known shortest distances.

use crate::graph::WeightMatrix;

/// A graph together with one query and its expected minimum cost
#[derive(Debug, Clone)]
pub struct Fixture {
    pub name: &'static str,
    pub graph: WeightMatrix<u32>,
    pub source: usize,
    pub destination: usize,
    pub expected_cost: u32,
}

/// `0` alone, queried against itself
pub fn single_node() -> Fixture {
    Fixture {
        name: "single_node",
        graph: WeightMatrix::from_fn(1, |_, _| 0),
        source: 0,
        destination: 0,
        expected_cost: 0,
    }
}

/// `0 -- 1 [3]`
pub fn double_node() -> Fixture {
    Fixture {
        name: "double_node",
        graph: undirected(2, &[(0, 1, 3)]),
        source: 0,
        destination: 1,
        expected_cost: 3,
    }
}

/// `0 -> 2 -> 3` costs 7, the detour `0 -> 1 -> 4 -> 3` costs 5
pub fn five_nodes() -> Fixture {
    Fixture {
        name: "five_nodes",
        graph: undirected(
            5,
            &[(0, 1, 3), (0, 2, 2), (1, 4, 1), (2, 3, 5), (4, 3, 1)],
        ),
        source: 0,
        destination: 3,
        expected_cost: 5,
    }
}

/// Ten vertices where vertex 1 is isolated and the destination has two
/// near-equal routes through 7 and 8
pub fn ten_nodes() -> Fixture {
    Fixture {
        name: "ten_nodes",
        graph: undirected(
            10,
            &[
                (0, 2, 1),
                (0, 4, 2),
                (2, 3, 9),
                (4, 3, 2),
                (3, 5, 1),
                (3, 6, 2),
                (5, 7, 8),
                (5, 8, 9),
                (7, 9, 1),
                (8, 9, 1),
            ],
        ),
        source: 0,
        destination: 9,
        expected_cost: 14,
    }
}

/// All reference fixtures, smallest first
pub fn all() -> Vec<Fixture> {
    vec![single_node(), double_node(), five_nodes(), ten_nodes()]
}

fn undirected(size: usize, edges: &[(usize, usize, u32)]) -> WeightMatrix<u32> {
    WeightMatrix::from_fn(size, |from, to| {
        edges
            .iter()
            .find(|&&(a, b, _)| (a, b) == (from, to) || (b, a) == (from, to))
            .map_or(0, |&(_, _, weight)| weight)
    })
}

//! Dijkstra Path - uniform-cost shortest path search with closed-set reconstruction
//!
//! The search engine expands the cheapest frontier node of a non-negative
//! weighted graph until the destination is selected, recording every node it
//! finalizes in an insertion-ordered closed set. The path reconstructor walks
//! that closed set backward from the destination to the source.
//!
//! ```
//! use dijkstra_path::{UniformCostSearch, WeightMatrix};
//!
//! let graph = WeightMatrix::from_rows(vec![
//!     vec![0u32, 3, 2, 0, 0],
//!     vec![3, 0, 0, 0, 1],
//!     vec![2, 0, 0, 5, 0],
//!     vec![0, 0, 5, 0, 1],
//!     vec![0, 1, 0, 1, 0],
//! ]).unwrap();
//!
//! let outcome = UniformCostSearch::new().search(&graph, 0, 3).unwrap();
//! assert!(outcome.is_success());
//! assert_eq!(outcome.destination_cost(), Some(5));
//!
//! let trace = outcome.path(&graph).unwrap();
//! assert_eq!(trace.len(), 3);
//! ```

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    reconstruct::{reconstruct_path, TraceEdge},
    uniform_cost::{SearchConfig, SelfLoopPolicy, SymmetryPolicy, UniformCostSearch},
    PathSearch, SearchOutcome, SearchStatus, Weight,
};
/// Re-export main types for convenient use
pub use data_structures::{ClosedSet, NodeRecord, OpenSet, OpenUpdate};
pub use graph::{directed::DirectedGraph, matrix::WeightMatrix, Graph};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Weight matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare { row: usize, len: usize, expected: usize },

    #[error("Negative edge weight {weight} on edge from {from} to {to}")]
    NegativeWeight { from: usize, to: usize, weight: String },

    #[error("Self-loop with non-zero weight on vertex {0}")]
    SelfLoop(usize),

    #[error("Asymmetric edge: from {from} to {to} has no matching reverse edge")]
    AsymmetricEdge { from: usize, to: usize },

    #[error("Path cost overflows the weight type on edge from {from} to {to}")]
    CostOverflow { from: usize, to: usize },

    #[error("Destination {destination} is unreachable from source {start}")]
    Unreachable { start: usize, destination: usize },

    #[error("Search has no destination to reconstruct a path to")]
    NoDestination,

    #[error("No finalized predecessor of vertex {0} in the closed set")]
    NoFinalizedPredecessor(usize),

    #[error("Path trace through vertex {0} does not lead back to the source")]
    BrokenTrace(usize),

    #[error("Invalid graph JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

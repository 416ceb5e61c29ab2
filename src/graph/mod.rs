pub mod traits;
pub mod matrix;
pub mod directed;
pub mod generators;
pub mod fixtures;

pub use traits::Graph;
pub use matrix::WeightMatrix;
pub use directed::DirectedGraph;

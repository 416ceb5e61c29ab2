pub mod node;
pub mod open_set;
pub mod closed_set;

pub use node::NodeRecord;
pub use open_set::{OpenSet, OpenUpdate};
pub use closed_set::ClosedSet;

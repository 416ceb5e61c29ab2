pub mod traits;
pub mod uniform_cost;
pub mod reconstruct;

pub use traits::{PathSearch, SearchOutcome, SearchStatus, Weight};

use std::fmt::{Debug, Display};
use std::ops::Add;

use num_traits::{CheckedAdd, Zero};
use ordered_float::OrderedFloat;
use serde::Serialize;

use crate::algorithm::reconstruct::{reconstruct_path, TraceEdge};
use crate::data_structures::ClosedSet;
use crate::graph::Graph;
use crate::{Error, Result};

/// Edge weight and path cost.
///
/// `W::zero()` is the distance of the source to itself. In a dense
/// [`WeightMatrix`](crate::WeightMatrix) it also marks a missing edge, which is
/// why the cost table never uses it as an "unknown" marker.
pub trait Weight: Copy + Debug + Display + Ord + Zero + Add<Output = Self> {
    /// Adds two costs, or `None` when the sum does not fit the type
    fn checked_sum(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_sum(self, rhs: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &rhs)
                }
            }
        )*
    };
}

impl_integer_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! impl_float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for OrderedFloat<$t> {
                fn checked_sum(self, rhs: Self) -> Option<Self> {
                    let sum = self + rhs;
                    // Infinite operands stay infinite, only a finite sum may overflow
                    if sum.0.is_finite() || !(self.0.is_finite() && rhs.0.is_finite()) {
                        Some(sum)
                    } else {
                        None
                    }
                }
            }
        )*
    };
}

impl_float_weight!(f32, f64);

/// How a search run terminated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    /// The destination was selected from the open set
    Reached,
    /// The open set ran dry before the destination was selected
    Unreachable,
    /// No destination was requested and every reachable node was finalized
    Exhausted,
}

/// Everything a search run leaves behind
#[derive(Debug, Clone)]
pub struct SearchOutcome<W>
where
    W: Weight,
{
    /// How the run terminated
    pub status: SearchStatus,

    /// Source vertex ID
    pub source: usize,

    /// Destination vertex ID, `None` for an exhaustive exploration
    pub destination: Option<usize>,

    /// Best known distance from the source for each vertex, `None` if never reached.
    /// Only finalized vertices (and a reached destination) are guaranteed minimal.
    pub costs: Vec<Option<W>>,

    /// Finalized vertices in the order they were finalized.
    /// A reached destination is not part of it.
    pub closed: ClosedSet<W>,

    /// Number of vertices expanded
    pub expansions: usize,
}

impl<W> SearchOutcome<W>
where
    W: Weight,
{
    /// Returns true if the destination was reached
    pub fn is_success(&self) -> bool {
        self.status == SearchStatus::Reached
    }

    /// Returns the cost-table entry for a vertex
    pub fn cost_to(&self, vertex: usize) -> Option<W> {
        self.costs.get(vertex).copied().flatten()
    }

    /// Returns the minimum distance to the destination if it was reached
    pub fn destination_cost(&self) -> Option<W> {
        match (self.status, self.destination) {
            (SearchStatus::Reached, Some(destination)) => self.cost_to(destination),
            _ => None,
        }
    }

    /// Returns true if the distance to `vertex` is final
    pub fn is_finalized(&self, vertex: usize) -> bool {
        self.closed.contains(vertex)
            || (self.is_success() && self.destination == Some(vertex))
    }

    /// Reconstructs the path from the destination back to the source.
    ///
    /// Refuses to run unless the search reached its destination.
    pub fn path<G>(&self, graph: &G) -> Result<Vec<TraceEdge<W>>>
    where
        G: Graph<W> + ?Sized,
    {
        match (self.status, self.destination) {
            (SearchStatus::Reached, Some(destination)) => {
                reconstruct_path(graph, self.source, destination, &self.closed)
            }
            (_, Some(destination)) => Err(Error::Unreachable {
                start: self.source,
                destination,
            }),
            (_, None) => Err(Error::NoDestination),
        }
    }

    /// Reconstructs the path from any finalized vertex back to the source
    pub fn path_to<G>(&self, graph: &G, target: usize) -> Result<Vec<TraceEdge<W>>>
    where
        G: Graph<W> + ?Sized,
    {
        if !graph.has_vertex(target) {
            return Err(Error::InvalidVertex(target));
        }
        if !self.is_finalized(target) {
            return Err(Error::Unreachable {
                start: self.source,
                destination: target,
            });
        }
        reconstruct_path(graph, self.source, target, &self.closed)
    }
}

/// Trait for point-to-point shortest path searches
pub trait PathSearch<W, G>
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    /// Searches for the minimum-cost path from `source` to `destination`
    fn search(&self, graph: &G, source: usize, destination: usize) -> Result<SearchOutcome<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the path of a successful search as edges from the destination back to the source
    fn get_path(&self, graph: &G, outcome: &SearchOutcome<W>) -> Result<Vec<TraceEdge<W>>> {
        outcome.path(graph)
    }
}

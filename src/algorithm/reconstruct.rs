use std::fmt;

use log::debug;
use serde::Serialize;

use crate::algorithm::Weight;
use crate::data_structures::ClosedSet;
use crate::graph::Graph;
use crate::{Error, Result};

/// One step of a backward path trace: the edge `from -> to`, emitted while
/// walking from the destination towards the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TraceEdge<W>
where
    W: Weight,
{
    pub to: usize,
    pub from: usize,
    pub weight: W,
}

impl<W> fmt::Display for TraceEdge<W>
where
    W: Weight,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}<--{}", self.to, self.from)
    }
}

/// Walks backward from `destination` to `source` through the closed set.
///
/// At every step the finalized predecessor `p` of the current vertex `v`
/// minimizing `cost(p) + weight(p, v)` is chosen (ties: cheaper `p`, then
/// smaller ID). Predecessors come from incoming edges, so directed graphs are
/// traced correctly. The returned edges are in traversal order, destination
/// first; an empty trace means `source == destination`.
pub fn reconstruct_path<W, G>(
    graph: &G,
    source: usize,
    destination: usize,
    closed: &ClosedSet<W>,
) -> Result<Vec<TraceEdge<W>>>
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    for vertex in [source, destination] {
        if !graph.has_vertex(vertex) {
            return Err(Error::InvalidVertex(vertex));
        }
    }

    let mut trace = Vec::new();
    let mut current = destination;

    while current != source {
        // Every hop lands on a distinct closed vertex unless the closed set
        // belongs to some other graph or source.
        if trace.len() > closed.len() {
            return Err(Error::BrokenTrace(current));
        }

        let (_, _, from, weight) = graph
            .predecessors(current)
            .filter(|&(from, _)| from != current)
            .filter_map(|(from, weight)| {
                let cost = closed.cost_of(from)?;
                // An overflowing sum exceeds the cost of `current`, so it is never the minimum
                let through = cost.checked_sum(weight)?;
                Some((through, cost, from, weight))
            })
            .min()
            .ok_or(Error::NoFinalizedPredecessor(current))?;

        let edge = TraceEdge {
            to: current,
            from,
            weight,
        };
        debug!("{}", edge);
        trace.push(edge);
        current = from;
    }

    Ok(trace)
}

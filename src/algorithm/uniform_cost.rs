use log::{debug, trace};

use crate::algorithm::{PathSearch, SearchOutcome, SearchStatus, Weight};
use crate::data_structures::{ClosedSet, NodeRecord, OpenSet, OpenUpdate};
use crate::graph::Graph;
use crate::{Error, Result};

/// Defines how non-zero diagonal entries are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelfLoopPolicy {
    /// Fail the search with [`Error::SelfLoop`]
    #[default]
    Reject,
    /// Never expand or reconstruct through a self-loop
    Ignore,
}

/// Defines whether the graph must be undirected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SymmetryPolicy {
    /// Accept directed graphs
    #[default]
    Any,
    /// Fail the search with [`Error::AsymmetricEdge`] unless every edge has an equal reverse edge
    RequireSymmetric,
}

/// Input validation settings applied before every search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchConfig {
    pub self_loops: SelfLoopPolicy,
    pub symmetry: SymmetryPolicy,
}

/// Greedy frontier expansion (uniform-cost search) with explicit open and closed sets.
///
/// Each expansion finalizes the current vertex, relaxes its successors, and
/// selects the cheapest open vertex as the next current one (ties go to the
/// smallest vertex ID). The run stops when the destination is selected or when
/// the open set is empty. Edge weights must be non-negative, and a path cost
/// that does not fit the weight type fails the run with [`Error::CostOverflow`].
#[derive(Debug, Default, Clone)]
pub struct UniformCostSearch {
    config: SearchConfig,
}

impl UniformCostSearch {
    /// Creates a search with the default configuration
    pub fn new() -> Self {
        UniformCostSearch {
            config: SearchConfig::default(),
        }
    }

    /// Replaces the whole configuration
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Set how self-loops are handled
    pub fn with_self_loops(mut self, policy: SelfLoopPolicy) -> Self {
        self.config.self_loops = policy;
        self
    }

    /// Set whether asymmetric graphs are rejected
    pub fn with_symmetry(mut self, policy: SymmetryPolicy) -> Self {
        self.config.symmetry = policy;
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Searches for the minimum-cost path from `source` to `destination`.
    ///
    /// An unreachable destination is reported through
    /// [`SearchStatus::Unreachable`], not as an error; errors are reserved for
    /// invalid input.
    pub fn search<W, G>(&self, graph: &G, source: usize, destination: usize) -> Result<SearchOutcome<W>>
    where
        W: Weight,
        G: Graph<W> + ?Sized,
    {
        if !graph.has_vertex(destination) {
            return Err(Error::InvalidVertex(destination));
        }
        self.run(graph, source, Some(destination))
    }

    /// Finalizes every vertex reachable from `source`
    pub fn explore<W, G>(&self, graph: &G, source: usize) -> Result<SearchOutcome<W>>
    where
        W: Weight,
        G: Graph<W> + ?Sized,
    {
        self.run(graph, source, None)
    }

    fn run<W, G>(&self, graph: &G, source: usize, destination: Option<usize>) -> Result<SearchOutcome<W>>
    where
        W: Weight,
        G: Graph<W> + ?Sized,
    {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }
        self.validate::<W, G>(graph)?;

        debug!(
            "Searching from {} to {:?} over {} vertices",
            source,
            destination,
            graph.vertex_count()
        );

        let mut costs: Vec<Option<W>> = vec![None; graph.vertex_count()];
        let mut open = OpenSet::new();
        let mut closed = ClosedSet::new();
        let mut expansions = 0;

        costs[source] = Some(W::zero());
        let mut current = NodeRecord::new(source, W::zero());

        let status = loop {
            if Some(current.id) == destination {
                break SearchStatus::Reached;
            }

            closed.insert(current);
            expansions += 1;
            trace!("Expanding {}", current);

            for (successor, weight) in graph.successors(current.id) {
                if closed.contains(successor) {
                    continue;
                }

                let candidate = current
                    .cost
                    .checked_sum(weight)
                    .ok_or(Error::CostOverflow {
                        from: current.id,
                        to: successor,
                    })?;
                let cost = match costs[successor] {
                    Some(known) if known <= candidate => known,
                    _ => {
                        costs[successor] = Some(candidate);
                        candidate
                    }
                };
                match open.insert_or_update(successor, cost) {
                    OpenUpdate::Inserted => trace!("Discovered {} at {}", successor, cost),
                    OpenUpdate::Updated => trace!("Relaxed {} to {}", successor, cost),
                    OpenUpdate::Unchanged => {}
                }
            }

            #[cfg(feature = "verify")]
            verify_invariants(&costs, &open, &closed);

            match open.pop_min() {
                Some(next) => current = next,
                None if destination.is_some() => break SearchStatus::Unreachable,
                None => break SearchStatus::Exhausted,
            }
        };

        debug!(
            "Search from {} finished as {:?} after {} expansions",
            source, status, expansions
        );

        Ok(SearchOutcome {
            status,
            source,
            destination,
            costs,
            closed,
            expansions,
        })
    }

    /// Rejects inputs the search would silently get wrong
    fn validate<W, G>(&self, graph: &G) -> Result<()>
    where
        W: Weight,
        G: Graph<W> + ?Sized,
    {
        for from in 0..graph.vertex_count() {
            for (to, weight) in graph.successors(from) {
                if weight < W::zero() {
                    return Err(Error::NegativeWeight {
                        from,
                        to,
                        weight: weight.to_string(),
                    });
                }
                if from == to {
                    match self.config.self_loops {
                        SelfLoopPolicy::Reject => return Err(Error::SelfLoop(from)),
                        SelfLoopPolicy::Ignore => continue,
                    }
                }
                if self.config.symmetry == SymmetryPolicy::RequireSymmetric
                    && graph.edge_weight(to, from) != Some(weight)
                {
                    return Err(Error::AsymmetricEdge { from, to });
                }
            }
        }
        Ok(())
    }
}

impl<W, G> PathSearch<W, G> for UniformCostSearch
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    fn search(&self, graph: &G, source: usize, destination: usize) -> Result<SearchOutcome<W>> {
        UniformCostSearch::search(self, graph, source, destination)
    }

    fn name(&self) -> &'static str {
        "UniformCostSearch"
    }
}

/// Every open record mirrors the cost table and no vertex is both open and closed
#[cfg(feature = "verify")]
fn verify_invariants<W: Weight>(costs: &[Option<W>], open: &OpenSet<W>, closed: &ClosedSet<W>) {
    for record in open.iter() {
        assert_eq!(
            Some(record.cost),
            costs[record.id],
            "open record {} disagrees with the cost table",
            record
        );
        assert!(!closed.contains(record.id), "{} is both open and closed", record);
    }
    for record in closed.iter() {
        assert_eq!(
            Some(record.cost),
            costs[record.id],
            "closed record {} was revised",
            record
        );
    }
}

use std::collections::{BTreeSet, HashMap};

use crate::algorithm::Weight;
use crate::data_structures::NodeRecord;

/// What [`OpenSet::insert_or_update`] did to the frontier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenUpdate {
    /// The vertex was not open and has been added
    Inserted,
    /// The vertex was open and its cost changed
    Updated,
    /// The vertex was open with the same cost
    Unchanged,
}

/// The search frontier: discovered vertices that are not finalized yet.
///
/// Records are kept ordered by `(cost, id)`, so [`pop_min`](Self::pop_min)
/// returns the cheapest vertex and breaks ties by the smallest vertex ID. Each
/// vertex is present at most once, and popped vertices are physically removed.
#[derive(Debug, Clone)]
pub struct OpenSet<W>
where
    W: Weight,
{
    /// Ordered `(cost, vertex)` pairs
    queue: BTreeSet<(W, usize)>,

    /// Current cost of every open vertex
    costs: HashMap<usize, W>,
}

impl<W> OpenSet<W>
where
    W: Weight,
{
    /// Creates a new empty open set
    pub fn new() -> Self {
        OpenSet {
            queue: BTreeSet::new(),
            costs: HashMap::new(),
        }
    }

    /// Returns true if the open set is empty
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// Returns the number of open vertices
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    /// Returns true if `id` is open
    pub fn contains(&self, id: usize) -> bool {
        self.costs.contains_key(&id)
    }

    /// Returns the recorded cost of an open vertex
    pub fn cost_of(&self, id: usize) -> Option<W> {
        self.costs.get(&id).copied()
    }

    /// Adds `id` with `cost`, or moves an open `id` to `cost`
    pub fn insert_or_update(&mut self, id: usize, cost: W) -> OpenUpdate {
        match self.costs.insert(id, cost) {
            None => {
                self.queue.insert((cost, id));
                OpenUpdate::Inserted
            }
            Some(old) if old == cost => OpenUpdate::Unchanged,
            Some(old) => {
                self.queue.remove(&(old, id));
                self.queue.insert((cost, id));
                OpenUpdate::Updated
            }
        }
    }

    /// Returns the cheapest record without removing it
    pub fn peek_min(&self) -> Option<NodeRecord<W>> {
        self.queue
            .first()
            .map(|&(cost, id)| NodeRecord::new(id, cost))
    }

    /// Removes and returns the cheapest record
    pub fn pop_min(&mut self) -> Option<NodeRecord<W>> {
        let (cost, id) = self.queue.pop_first()?;
        self.costs.remove(&id);
        Some(NodeRecord::new(id, cost))
    }

    /// Removes `id` from the frontier, returning its cost if it was open
    pub fn remove(&mut self, id: usize) -> Option<W> {
        let cost = self.costs.remove(&id)?;
        self.queue.remove(&(cost, id));
        Some(cost)
    }

    /// Iterates over the open records, cheapest first
    pub fn iter(&self) -> impl Iterator<Item = NodeRecord<W>> + '_ {
        self.queue.iter().map(|&(cost, id)| NodeRecord::new(id, cost))
    }

    /// Clears the open set
    pub fn clear(&mut self) {
        self.queue.clear();
        self.costs.clear();
    }
}

impl<W> Default for OpenSet<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

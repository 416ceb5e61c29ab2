use std::fmt;

use serde::Serialize;

use crate::algorithm::Weight;

/// A `(vertex, cost)` snapshot.
///
/// The cost is the best known distance from the source when the record was
/// created or last updated; the search's cost table stays the source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NodeRecord<W>
where
    W: Weight,
{
    pub id: usize,
    pub cost: W,
}

impl<W> NodeRecord<W>
where
    W: Weight,
{
    pub fn new(id: usize, cost: W) -> Self {
        NodeRecord { id, cost }
    }
}

impl<W> fmt::Display for NodeRecord<W>
where
    W: Weight,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.id, self.cost)
    }
}

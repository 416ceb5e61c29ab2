use std::collections::HashMap;

use crate::algorithm::Weight;
use crate::data_structures::NodeRecord;

/// Finalized vertices, in the order they were finalized.
///
/// A vertex can only be inserted once and is never removed.
#[derive(Debug, Clone)]
pub struct ClosedSet<W>
where
    W: Weight,
{
    /// Records in insertion order
    records: Vec<NodeRecord<W>>,

    /// Vertex ID -> position in `records`
    index: HashMap<usize, usize>,
}

impl<W> ClosedSet<W>
where
    W: Weight,
{
    /// Creates a new empty closed set
    pub fn new() -> Self {
        ClosedSet {
            records: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Returns true if no vertex was finalized
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of finalized vertices
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Finalizes a record. Returns false, leaving the set untouched, if the
    /// vertex was already finalized.
    pub fn insert(&mut self, record: NodeRecord<W>) -> bool {
        if self.index.contains_key(&record.id) {
            return false;
        }
        self.index.insert(record.id, self.records.len());
        self.records.push(record);
        true
    }

    /// Returns true if `id` was finalized
    pub fn contains(&self, id: usize) -> bool {
        self.index.contains_key(&id)
    }

    /// Returns the record of a finalized vertex
    pub fn get(&self, id: usize) -> Option<&NodeRecord<W>> {
        self.index.get(&id).map(|&position| &self.records[position])
    }

    /// Returns the final cost of a finalized vertex
    pub fn cost_of(&self, id: usize) -> Option<W> {
        self.get(id).map(|record| record.cost)
    }

    /// Iterates over the records in finalization order
    pub fn iter(&self) -> std::slice::Iter<'_, NodeRecord<W>> {
        self.records.iter()
    }

    /// Returns the records in finalization order
    pub fn as_slice(&self) -> &[NodeRecord<W>] {
        &self.records
    }
}

impl<W> Default for ClosedSet<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> FromIterator<NodeRecord<W>> for ClosedSet<W>
where
    W: Weight,
{
    /// Later duplicates of an already finalized vertex are ignored
    fn from_iter<I: IntoIterator<Item = NodeRecord<W>>>(iter: I) -> Self {
        let mut closed = ClosedSet::new();
        for record in iter {
            closed.insert(record);
        }
        closed
    }
}

impl<'a, W> IntoIterator for &'a ClosedSet<W>
where
    W: Weight,
{
    type Item = &'a NodeRecord<W>;
    type IntoIter = std::slice::Iter<'a, NodeRecord<W>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

use crate::algorithm::Weight;
use crate::graph::matrix::WeightMatrix;
use crate::graph::traits::Graph;
use crate::{Error, Result};
use std::collections::HashMap;

/// A directed graph implementation using adjacency lists.
///
/// Keeps an explicit incoming-edge index so that predecessor queries don't
/// rely on the graph being symmetric.
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Weight,
{
    /// Number of vertices in the graph
    vertex_count: usize,

    /// Outgoing edges for each vertex: vertex_id -> [(target_vertex, weight)]
    outgoing_edges: HashMap<usize, Vec<(usize, W)>>,

    /// Incoming edges for each vertex: vertex_id -> [(source_vertex, weight)]
    incoming_edges: HashMap<usize, Vec<(usize, W)>>,
}

impl<W> DirectedGraph<W>
where
    W: Weight,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            vertex_count: 0,
            outgoing_edges: HashMap::new(),
            incoming_edges: HashMap::new(),
        }
    }

    /// Creates a new directed graph with the specified number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        let mut graph = DirectedGraph {
            vertex_count: vertices,
            outgoing_edges: HashMap::with_capacity(vertices),
            incoming_edges: HashMap::with_capacity(vertices),
        };

        // Initialize empty edge lists for each vertex
        for v in 0..vertices {
            graph.outgoing_edges.insert(v, Vec::new());
            graph.incoming_edges.insert(v, Vec::new());
        }

        graph
    }

    /// Converts every non-zero matrix entry into a directed edge.
    ///
    /// Fails with [`Error::NegativeWeight`] on the first negative entry.
    pub fn from_matrix(matrix: &WeightMatrix<W>) -> Result<Self> {
        let mut graph = DirectedGraph::with_capacity(matrix.size());
        for from in 0..matrix.size() {
            for (to, weight) in matrix.successors(from) {
                if !graph.add_edge(from, to, weight) {
                    return Err(Error::NegativeWeight {
                        from,
                        to,
                        weight: weight.to_string(),
                    });
                }
            }
        }
        Ok(graph)
    }

    /// Adds a vertex to the graph and returns its ID
    pub fn add_vertex(&mut self) -> usize {
        let new_id = self.vertex_count;
        self.outgoing_edges.insert(new_id, Vec::new());
        self.incoming_edges.insert(new_id, Vec::new());
        self.vertex_count += 1;
        new_id
    }

    /// Adds a directed edge between vertices with the given weight.
    ///
    /// Returns false for unknown vertices and for negative weights. Zero is a
    /// valid weight here. An existing edge gets its weight replaced.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) -> bool {
        if !self.has_vertex(from) || !self.has_vertex(to) || weight < W::zero() {
            return false;
        }

        let outgoing = self.outgoing_edges.entry(from).or_default();
        if let Some(edge) = outgoing.iter_mut().find(|(target, _)| *target == to) {
            edge.1 = weight;
            if let Some(edge) = self
                .incoming_edges
                .entry(to)
                .or_default()
                .iter_mut()
                .find(|(source, _)| *source == from)
            {
                edge.1 = weight;
            }
            return true;
        }

        outgoing.push((to, weight));
        self.incoming_edges.entry(to).or_default().push((from, weight));
        true
    }

    /// Adds the edge in both directions
    pub fn add_undirected_edge(&mut self, a: usize, b: usize, weight: W) -> bool {
        self.add_edge(a, b, weight) && self.add_edge(b, a, weight)
    }
}

impl<W> Default for DirectedGraph<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.outgoing_edges.values().map(|edges| edges.len()).sum()
    }

    fn successors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if let Some(edges) = self.outgoing_edges.get(&vertex) {
            Box::new(edges.iter().cloned())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn predecessors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if let Some(edges) = self.incoming_edges.get(&vertex) {
            Box::new(edges.iter().cloned())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn edge_weight(&self, from: usize, to: usize) -> Option<W> {
        if let Some(edges) = self.outgoing_edges.get(&from) {
            edges.iter().find(|(target, _)| *target == to).map(|(_, weight)| *weight)
        } else {
            None
        }
    }
}

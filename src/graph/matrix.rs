use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::algorithm::Weight;
use crate::graph::traits::Graph;
use crate::{Error, Result};

/// A dense square weight matrix over vertices `0..size`.
///
/// `weight(i, j) == 0` means there is no edge from `i` to `j`; any other value
/// is the edge cost. Nothing here forces the matrix to be symmetric, the search
/// engine checks that on request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightMatrix<W>
where
    W: Weight,
{
    /// Number of vertices (rows and columns)
    size: usize,

    /// Row-major weights: `weights[from * size + to]`
    weights: Vec<W>,
}

/// JSON shapes accepted for a weight matrix
#[derive(Deserialize)]
#[serde(untagged)]
enum MatrixDocument<W> {
    Rows(Vec<Vec<W>>),
    Object { weights: Vec<Vec<W>> },
}

impl<W> WeightMatrix<W>
where
    W: Weight,
{
    /// Creates a matrix with `size` vertices and no edges
    pub fn new(size: usize) -> Self {
        WeightMatrix {
            size,
            weights: vec![W::zero(); size * size],
        }
    }

    /// Builds a matrix from its rows, rejecting non-square input
    pub fn from_rows(rows: Vec<Vec<W>>) -> Result<Self> {
        let size = rows.len();
        let mut weights = Vec::with_capacity(size * size);

        for (row, entries) in rows.into_iter().enumerate() {
            if entries.len() != size {
                return Err(Error::NotSquare {
                    row,
                    len: entries.len(),
                    expected: size,
                });
            }
            weights.extend(entries);
        }

        Ok(WeightMatrix { size, weights })
    }

    /// Builds a matrix whose entry `(from, to)` is `weight(from, to)`
    pub fn from_fn<F>(size: usize, mut weight: F) -> Self
    where
        F: FnMut(usize, usize) -> W,
    {
        let mut weights = Vec::with_capacity(size * size);
        for from in 0..size {
            for to in 0..size {
                weights.push(weight(from, to));
            }
        }
        WeightMatrix { size, weights }
    }

    /// Builds an undirected graph from `(a, b, weight)` triples
    pub fn from_edges(size: usize, edges: &[(usize, usize, W)]) -> Result<Self> {
        let mut matrix = WeightMatrix::new(size);
        for &(a, b, weight) in edges {
            matrix.connect(a, b, weight)?;
        }
        Ok(matrix)
    }

    /// Returns the number of vertices
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the raw entry at `(from, to)`, zero when there is no edge
    pub fn get(&self, from: usize, to: usize) -> Option<W> {
        if from < self.size && to < self.size {
            Some(self.weights[from * self.size + to])
        } else {
            None
        }
    }

    /// Sets the directed entry `(from, to)`. A zero weight removes the edge.
    pub fn set_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        for vertex in [from, to] {
            if vertex >= self.size {
                return Err(Error::InvalidVertex(vertex));
            }
        }
        self.weights[from * self.size + to] = weight;
        Ok(())
    }

    /// Sets both `(a, b)` and `(b, a)`
    pub fn connect(&mut self, a: usize, b: usize, weight: W) -> Result<()> {
        self.set_edge(a, b, weight)?;
        self.set_edge(b, a, weight)
    }

    /// Iterates over the rows of the matrix
    pub fn rows(&self) -> impl Iterator<Item = &[W]> + '_ {
        // chunks() panics on zero
        self.weights.chunks(self.size.max(1))
    }

    /// Returns the first `(from, to)` whose reverse entry differs, if any
    pub fn first_asymmetry(&self) -> Option<(usize, usize)> {
        (0..self.size)
            .flat_map(|from| ((from + 1)..self.size).map(move |to| (from, to)))
            .find(|&(from, to)| self.get(from, to) != self.get(to, from))
    }

    /// Returns true if the matrix describes an undirected graph
    pub fn is_symmetric(&self) -> bool {
        self.first_asymmetry().is_none()
    }
}

impl<W> WeightMatrix<W>
where
    W: Weight + DeserializeOwned,
{
    /// Parses either `[[...], ...]` or `{ "weights": [[...], ...] }`
    pub fn from_json_str(json: &str) -> Result<Self> {
        let rows = match serde_json::from_str::<MatrixDocument<W>>(json)? {
            MatrixDocument::Rows(rows) => rows,
            MatrixDocument::Object { weights } => weights,
        };
        WeightMatrix::from_rows(rows)
    }
}

impl<W> Graph<W> for WeightMatrix<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.size
    }

    fn edge_count(&self) -> usize {
        self.weights.iter().filter(|weight| !weight.is_zero()).count()
    }

    fn successors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if vertex >= self.size {
            return Box::new(std::iter::empty());
        }
        let row = &self.weights[vertex * self.size..(vertex + 1) * self.size];
        Box::new(
            row.iter()
                .copied()
                .enumerate()
                .filter(|(_, weight)| !weight.is_zero()),
        )
    }

    fn predecessors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if vertex >= self.size {
            return Box::new(std::iter::empty());
        }
        Box::new(
            (0..self.size)
                .map(move |from| (from, self.weights[from * self.size + vertex]))
                .filter(|(_, weight)| !weight.is_zero()),
        )
    }

    fn edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.get(from, to).filter(|weight| !weight.is_zero())
    }
}

//! Graph representations shared by the graph labs.

use std::collections::HashMap;
use std::ops::{Index, IndexMut};

/// Distance used for "no path" / "no edge" once a weight matrix is normalised.
pub const INFINITY: u64 = u64::MAX;

/// Row-major square matrix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SquareMatrix<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T: Clone> SquareMatrix<T> {
    /// Create a `size x size` matrix with every cell set to `value`.
    pub fn filled(size: usize, value: T) -> Self {
        Self {
            size,
            cells: vec![value; size * size],
        }
    }

    /// Build from nested rows.
    ///
    /// # Panics
    /// Panics if any row length differs from the number of rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            assert_eq!(row.len(), size, "Matrix rows must have the same length as the matrix");
            cells.extend(row);
        }
        Self { size, cells }
    }
}

impl<T> SquareMatrix<T> {
    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Borrow one row.
    pub fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.size..(row + 1) * self.size]
    }
}

impl<T> Index<(usize, usize)> for SquareMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.cells[row * self.size + col]
    }
}

impl<T> IndexMut<(usize, usize)> for SquareMatrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.cells[row * self.size + col]
    }
}

/// 0/1 adjacency matrix.
pub type AdjacencyMatrix = SquareMatrix<u8>;

/// Edge weights; 0 means "no edge" until normalised.
pub type WeightMatrix = SquareMatrix<u64>;

/// Directed graph given as a 0/1 adjacency matrix plus a separate weight matrix.
#[derive(Clone, Debug)]
pub struct WeightedDigraph {
    /// `1` where an edge exists.
    pub adjacency: AdjacencyMatrix,
    /// Weight of each existing edge, 0 elsewhere.
    pub weights: WeightMatrix,
}

impl WeightedDigraph {
    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.size()
    }
}

/// Labelled adjacency list; neighbour order is significant for traversal.
#[derive(Clone, Debug, Default)]
pub struct AdjacencyList {
    labels: Vec<String>,
    index: HashMap<String, usize>,
    neighbors: Vec<Vec<usize>>,
}

impl AdjacencyList {
    /// Empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Graph with `count` isolated vertices labelled `0..count`.
    pub fn with_vertices(count: usize) -> Self {
        let mut graph = Self::new();
        for v in 0..count {
            graph.add_vertex(&v.to_string());
        }
        graph
    }

    /// Build from `(vertex, neighbours)` pairs, keeping the given order.
    ///
    /// Neighbours that never appear as a key are added as leaf vertices.
    pub fn from_pairs(pairs: &[(&str, &[&str])]) -> Self {
        let mut graph = Self::new();
        for (vertex, _) in pairs {
            graph.add_vertex(vertex);
        }
        for (vertex, neighbors) in pairs {
            for neighbor in *neighbors {
                graph.add_edge_by_label(vertex, neighbor);
            }
        }
        graph
    }

    /// Add a vertex if it is not present yet and return its index.
    pub fn add_vertex(&mut self, label: &str) -> usize {
        if let Some(&idx) = self.index.get(label) {
            return idx;
        }
        let idx = self.labels.len();
        self.labels.push(label.to_string());
        self.index.insert(label.to_string(), idx);
        self.neighbors.push(Vec::new());
        idx
    }

    /// Append a directed edge between two vertex indices.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    pub fn add_edge(&mut self, from: usize, to: usize) {
        assert!(to < self.labels.len(), "Edge target {} out of range", to);
        self.neighbors[from].push(to);
    }

    /// Append a directed edge by label, creating missing vertices.
    pub fn add_edge_by_label(&mut self, from: &str, to: &str) {
        let from = self.add_vertex(from);
        let to = self.add_vertex(to);
        self.neighbors[from].push(to);
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    /// Outgoing neighbours of `vertex`, in insertion order.
    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        &self.neighbors[vertex]
    }

    /// Label of `vertex`.
    pub fn label(&self, vertex: usize) -> &str {
        &self.labels[vertex]
    }

    /// Index of the vertex with this label.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// Map an order of indices to labels.
    pub fn labels_of(&self, order: &[usize]) -> Vec<&str> {
        order.iter().map(|&v| self.label(v)).collect()
    }
}

/// Undirected weighted edge produced by the spanning tree variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    /// One endpoint (the parent, for Prim).
    pub from: usize,
    /// Other endpoint.
    pub to: usize,
    /// Edge weight.
    pub weight: u64,
}

/// Sum of the weights of `edges`.
pub fn total_weight(edges: &[Edge]) -> u64 {
    edges.iter().map(|e| e.weight).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs_adds_leaf_vertices() {
        let graph = AdjacencyList::from_pairs(&[("a", &["b", "c"]), ("b", &["c"])]);
        assert_eq!(graph.vertex_count(), 3);
        let a = graph.index_of("a").unwrap();
        assert_eq!(graph.labels_of(graph.neighbors(a)), vec!["b", "c"]);
    }

    #[test]
    fn test_square_matrix_indexing() {
        let mut m = SquareMatrix::from_rows(vec![vec![1u64, 2], vec![3, 4]]);
        assert_eq!(m[(1, 0)], 3);
        m[(0, 1)] = 9;
        assert_eq!(m.row(0), &[1, 9]);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn test_square_matrix_rejects_ragged_rows() {
        let _ = SquareMatrix::from_rows(vec![vec![1u64, 2], vec![3]]);
    }
}

//! Input generators for the labs.
//!
//! Every randomised generator takes the caller's RNG so a run can be replayed
//! from a seed.

use crate::config::{DIGRAPH_WEIGHT_MAX, DIGRAPH_WEIGHT_MIN};
use crate::error::{invalid_parameter, Result};
use crate::graph::model::{AdjacencyList, AdjacencyMatrix, SquareMatrix, WeightMatrix, WeightedDigraph};
use rand::Rng;

// ---------------------------------------------------------------------------
// Size sequences
// ---------------------------------------------------------------------------

/// Inclusive arithmetic sequence `start, start + step, ..., <= end`.
pub fn size_range(start: usize, end: usize, step: usize) -> Result<Vec<usize>> {
    if step == 0 {
        return Err(invalid_parameter("step", &step, &"must be positive"));
    }
    Ok((start..=end).step_by(step).collect())
}

// ---------------------------------------------------------------------------
// Arrays
// ---------------------------------------------------------------------------

/// `size` integers drawn uniformly from `low..=high`.
pub fn random_integer_array<R: Rng + ?Sized>(rng: &mut R, size: usize, low: i64, high: i64) -> Vec<i64> {
    (0..size).map(|_| rng.random_range(low..=high)).collect()
}

// ---------------------------------------------------------------------------
// Graphs
// ---------------------------------------------------------------------------

/// Random directed graph with separate adjacency and weight matrices.
///
/// For every ordered pair `x != y` a number in `0..=100` is drawn; the edge
/// exists when it is `<= coefficient`. Existing edges get a weight in
/// `10..=100`, everything else (diagonal included) weighs 0.
pub fn random_digraph<R: Rng + ?Sized>(rng: &mut R, size: usize, coefficient: u32) -> Result<WeightedDigraph> {
    if coefficient > 100 {
        return Err(invalid_parameter("coefficient", &coefficient, &"must be within 0..=100"));
    }

    let mut adjacency: AdjacencyMatrix = SquareMatrix::filled(size, 0);
    for x in 0..size {
        for y in 0..size {
            if x != y && rng.random_range(0..=100u32) <= coefficient {
                adjacency[(x, y)] = 1;
            }
        }
    }

    let mut weights: WeightMatrix = SquareMatrix::filled(size, 0);
    for x in 0..size {
        for y in 0..size {
            if adjacency[(x, y)] != 0 {
                weights[(x, y)] = rng.random_range(DIGRAPH_WEIGHT_MIN..=DIGRAPH_WEIGHT_MAX);
            }
        }
    }

    Ok(WeightedDigraph { adjacency, weights })
}

/// Random undirected graph as a symmetric weight matrix (0 = no edge).
pub fn random_undirected_graph<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    max_weight: u64,
    edge_probability: f64,
) -> Result<WeightMatrix> {
    if max_weight == 0 {
        return Err(invalid_parameter("max_weight", &max_weight, &"must be at least 1"));
    }
    if !(0.0..=1.0).contains(&edge_probability) {
        return Err(invalid_parameter("edge_probability", &edge_probability, &"must be within 0.0..=1.0"));
    }

    let mut graph: WeightMatrix = SquareMatrix::filled(size, 0);
    for i in 0..size {
        for j in (i + 1)..size {
            if rng.random_bool(edge_probability) {
                let weight = rng.random_range(1..=max_weight);
                graph[(i, j)] = weight;
                graph[(j, i)] = weight;
            }
        }
    }
    Ok(graph)
}

/// Random rooted tree on `size` vertices; vertex `i > 0` hangs off a random
/// earlier vertex, so vertex 0 reaches everything.
pub fn random_tree<R: Rng + ?Sized>(rng: &mut R, size: usize) -> AdjacencyList {
    let mut tree = AdjacencyList::with_vertices(size);
    for child in 1..size {
        let parent = rng.random_range(0..child);
        tree.add_edge(parent, child);
    }
    tree
}

/// Small balanced tree rooted at `D`.
pub fn balanced_tree() -> AdjacencyList {
    AdjacencyList::from_pairs(&[
        ("D", &["B", "E"]),
        ("B", &["A", "C"]),
        ("E", &["F"]),
        ("F", &[]),
        ("A", &[]),
        ("C", &[]),
    ])
}

/// Small unbalanced tree rooted at `D`; the `A` branch is three levels deeper.
pub fn unbalanced_tree() -> AdjacencyList {
    AdjacencyList::from_pairs(&[
        ("D", &["B", "E"]),
        ("B", &["A", "C"]),
        ("E", &["F"]),
        ("F", &[]),
        ("A", &["S", "T"]),
        ("S", &["N"]),
        ("T", &[]),
        ("N", &[]),
        ("C", &[]),
    ])
}

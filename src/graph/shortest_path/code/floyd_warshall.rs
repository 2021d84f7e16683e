use crate::graph::model::{AdjacencyMatrix, WeightMatrix, INFINITY};

/// Distance matrix for [`floyd_warshall`]: the edge weight where adjacency
/// is `1`, [`INFINITY`] for every other off-diagonal pair, 0 on the diagonal.
///
/// Edges are read from `adjacency` alone, so a present edge of weight 0
/// stays a 0-cost edge.
///
/// # Panics
/// Panics if the matrices differ in size.
pub fn normalize_missing_edges(adjacency: &AdjacencyMatrix, weights: &WeightMatrix) -> WeightMatrix {
    let n = adjacency.size();
    assert_eq!(weights.size(), n, "Adjacency and weight matrices must have the same size");

    let mut normalized = WeightMatrix::filled(n, INFINITY);
    for i in 0..n {
        for j in 0..n {
            if i == j {
                normalized[(i, j)] = 0;
            } else if adjacency[(i, j)] == 1 {
                normalized[(i, j)] = weights[(i, j)];
            }
        }
    }
    normalized
}

/// All-pairs distances by the k/i/j triple loop.
///
/// Expects a matrix from [`normalize_missing_edges`]; sums saturate at
/// [`INFINITY`].
pub fn floyd_warshall(weights: &WeightMatrix) -> WeightMatrix {
    let n = weights.size();
    let mut dist = weights.clone();
    for k in 0..n {
        for i in 0..n {
            let via_k = dist[(i, k)];
            if via_k == INFINITY {
                continue;
            }
            for j in 0..n {
                let candidate = via_k.saturating_add(dist[(k, j)]);
                if candidate < dist[(i, j)] {
                    dist[(i, j)] = candidate;
                }
            }
        }
    }
    dist
}

use super::union_find::UnionFind;
use crate::graph::model::{Edge, WeightMatrix};

/// Kruskal's algorithm: scan edges by ascending weight and keep those that
/// join two different components.
pub fn kruskal(graph: &WeightMatrix) -> Vec<Edge> {
    let n = graph.size();
    let mut candidates = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            let weight = graph[(i, j)];
            if weight != 0 {
                candidates.push(Edge { from: i, to: j, weight });
            }
        }
    }
    candidates.sort_by_key(|e| e.weight);

    let mut components = UnionFind::new(n);
    let mut edges = Vec::with_capacity(n.saturating_sub(1));
    for edge in candidates {
        if components.union(edge.from, edge.to) {
            edges.push(edge);
            if edges.len() + 1 == n {
                break;
            }
        }
    }
    edges
}

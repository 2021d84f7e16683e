use crate::graph::model::{Edge, WeightMatrix, INFINITY};

/// Prim's algorithm with key/parent arrays and an O(V²) minimum scan.
///
/// When no remaining vertex is reachable from the trees built so far, the
/// first unreached vertex starts a new tree, so a disconnected graph
/// yields a spanning forest. Each edge is reported as `parent -> child`.
pub fn prim(graph: &WeightMatrix) -> Vec<Edge> {
    let n = graph.size();
    let mut key = vec![INFINITY; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut in_tree = vec![false; n];
    let mut edges = Vec::with_capacity(n.saturating_sub(1));

    for _ in 0..n {
        let mut next: Option<usize> = None;
        for v in 0..n {
            if !in_tree[v] && next.map_or(true, |u| key[v] < key[u]) {
                next = Some(v);
            }
        }
        let Some(u) = next else { break };
        in_tree[u] = true;

        if let Some(p) = parent[u] {
            edges.push(Edge {
                from: p,
                to: u,
                weight: graph[(p, u)],
            });
        }

        for v in 0..n {
            let weight = graph[(u, v)];
            if weight != 0 && !in_tree[v] && weight < key[v] {
                key[v] = weight;
                parent[v] = Some(u);
            }
        }
    }

    edges
}

use crate::graph::model::{AdjacencyMatrix, WeightMatrix, INFINITY};

/// Single-source distances with the O(V²) array-scan Dijkstra.
///
/// The next vertex is the unvisited one whose tentative distance is `<=`
/// the best seen so far in the scan, so later indices win ties. Only
/// edges with adjacency `1` are relaxed. Unreachable vertices stay at
/// [`INFINITY`].
///
/// # Panics
/// Panics if the matrices differ in size or `source` is out of range.
pub fn dijkstra(adjacency: &AdjacencyMatrix, weights: &WeightMatrix, source: usize) -> Vec<u64> {
    let n = adjacency.size();
    assert_eq!(weights.size(), n, "Adjacency and weight matrices must have the same size");
    assert!(source < n, "Source {} out of range", source);

    let mut dist = vec![INFINITY; n];
    let mut visited = vec![false; n];
    dist[source] = 0;

    for _ in 0..n {
        let mut current: Option<usize> = None;
        for v in 0..n {
            if !visited[v] && current.map_or(true, |u| dist[v] <= dist[u]) {
                current = Some(v);
            }
        }
        let Some(u) = current else { break };
        visited[u] = true;
        if dist[u] == INFINITY {
            continue;
        }

        for v in 0..n {
            if adjacency[(u, v)] == 1 && !visited[v] {
                let candidate = dist[u].saturating_add(weights[(u, v)]);
                if candidate < dist[v] {
                    dist[v] = candidate;
                }
            }
        }
    }

    dist
}

/// [`dijkstra`] from every source; row `s` holds the distances from `s`.
pub fn dijkstra_all_sources(adjacency: &AdjacencyMatrix, weights: &WeightMatrix) -> WeightMatrix {
    let rows = (0..adjacency.size()).map(|s| dijkstra(adjacency, weights, s)).collect();
    WeightMatrix::from_rows(rows)
}

use std::collections::VecDeque;

use crate::graph::model::AdjacencyList;

/// Breadth-first traversal from `root` with a FIFO queue.
///
/// Vertices are marked when enqueued so each is queued once.
///
/// # Panics
/// Panics if `root` is not a vertex of `graph`.
pub fn breadth_first(graph: &AdjacencyList, root: usize) -> Vec<usize> {
    assert!(root < graph.vertex_count(), "Root {} out of range", root);

    let mut visited = vec![false; graph.vertex_count()];
    let mut order = Vec::new();
    let mut queue = VecDeque::from([root]);
    visited[root] = true;

    while let Some(vertex) = queue.pop_front() {
        order.push(vertex);
        for &next in graph.neighbors(vertex) {
            if !visited[next] {
                visited[next] = true;
                queue.push_back(next);
            }
        }
    }
    order
}

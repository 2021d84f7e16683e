use crate::graph::model::AdjacencyList;

/// Recursive depth-first traversal from `root`.
///
/// A vertex is recorded when first reached, then its neighbours are
/// explored in list order. Recursion depth equals the depth of the
/// traversal tree.
///
/// # Panics
/// Panics if `root` is not a vertex of `graph`.
pub fn depth_first(graph: &AdjacencyList, root: usize) -> Vec<usize> {
    assert!(root < graph.vertex_count(), "Root {} out of range", root);

    let mut visited = vec![false; graph.vertex_count()];
    let mut order = Vec::new();
    visit(graph, root, &mut visited, &mut order);
    order
}

fn visit(graph: &AdjacencyList, vertex: usize, visited: &mut [bool], order: &mut Vec<usize>) {
    visited[vertex] = true;
    order.push(vertex);
    for &next in graph.neighbors(vertex) {
        if !visited[next] {
            visit(graph, next, visited, order);
        }
    }
}

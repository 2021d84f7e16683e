//! Traversal implementations.

mod breadth_first;
mod depth_first;

pub use breadth_first::breadth_first;
pub use depth_first::depth_first;

use crate::graph::model::AdjacencyList;
use crate::utils::VariantInfo;

/// Visitation order of the vertices reachable from the root.
pub type TraversalFn = fn(&AdjacencyList, usize) -> Vec<usize>;

pub fn available_variants() -> Vec<VariantInfo<TraversalFn>> {
    vec![
        VariantInfo {
            name: "depth_first",
            description: "Recursive DFS",
            function: depth_first,
        },
        VariantInfo {
            name: "breadth_first",
            description: "Queue-based BFS",
            function: breadth_first,
        },
    ]
}

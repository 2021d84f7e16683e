//! Shortest path implementations.

mod dijkstra;
mod floyd_warshall;

pub use dijkstra::{dijkstra, dijkstra_all_sources};
pub use floyd_warshall::{floyd_warshall, normalize_missing_edges};

use crate::graph::model::{WeightMatrix, WeightedDigraph};
use crate::utils::VariantInfo;

/// All-pairs distances from a digraph given as adjacency plus weights.
pub type AllPairsFn = fn(&WeightedDigraph) -> WeightMatrix;

fn dijkstra_variant(graph: &WeightedDigraph) -> WeightMatrix {
    dijkstra_all_sources(&graph.adjacency, &graph.weights)
}

fn floyd_warshall_variant(graph: &WeightedDigraph) -> WeightMatrix {
    floyd_warshall(&normalize_missing_edges(&graph.adjacency, &graph.weights))
}

pub fn available_variants() -> Vec<VariantInfo<AllPairsFn>> {
    vec![
        VariantInfo {
            name: "dijkstra",
            description: "Array-scan Dijkstra from every source",
            function: dijkstra_variant,
        },
        VariantInfo {
            name: "floyd_warshall",
            description: "Triple loop over the distance matrix",
            function: floyd_warshall_variant,
        },
    ]
}

//! Minimum spanning tree implementations over a symmetric weight matrix
//! (0 = no edge).

mod kruskal;
mod prim;
mod union_find;

pub use kruskal::kruskal;
pub use prim::prim;
pub use union_find::UnionFind;

use crate::graph::model::{Edge, WeightMatrix};
use crate::utils::VariantInfo;

pub type SpanningTreeFn = fn(&WeightMatrix) -> Vec<Edge>;

pub fn available_variants() -> Vec<VariantInfo<SpanningTreeFn>> {
    vec![
        VariantInfo {
            name: "prim",
            description: "Key array with linear minimum scan",
            function: prim,
        },
        VariantInfo {
            name: "kruskal",
            description: "Sorted edges with union-find",
            function: kruskal,
        },
    ]
}

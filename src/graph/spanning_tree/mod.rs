//! # Minimum spanning trees
//!
//! Prim and Kruskal on random undirected graphs. Both return the tree as a
//! list of edges; the tree itself may differ on ties but its weight may not.

pub mod bench;
pub mod code;
pub mod test;

pub use code::*;

use crate::config::{SPANNING_TREE_SIZES, UNDIRECTED_MAX_WEIGHT};
use crate::error::{verification_failed, Result};
use crate::generators::random_undirected_graph;
use crate::graph::model::total_weight;
use crate::registry::{LabRunner, VariantClosure};
use crate::utils::lab_rng;
use rand::rngs::StdRng;

/// Runner for the spanning tree lab
pub struct SpanningTreeRunner;

impl LabRunner for SpanningTreeRunner {
    fn name(&self) -> &'static str {
        "spanning_tree"
    }

    fn description(&self) -> &'static str {
        "Minimum spanning trees with Prim and Kruskal"
    }

    fn category(&self) -> &'static str {
        "graph"
    }

    fn size_label(&self) -> &'static str {
        "vertices"
    }

    fn default_sizes(&self) -> Vec<usize> {
        SPANNING_TREE_SIZES.to_vec()
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn variant_closures<'a>(&'a self, size: usize, rng: &mut StdRng) -> Result<Vec<VariantClosure<'a>>> {
        bench::variant_closures(size, rng)
    }

    fn verify(&self) -> Result<()> {
        let mut rng = lab_rng(Some(42));

        for (size, probability) in [(1, 0.5), (8, 0.2), (30, 0.5), (60, 0.9)] {
            let graph = random_undirected_graph(&mut rng, size, UNDIRECTED_MAX_WEIGHT, probability)?;
            let expected = total_weight(&kruskal(&graph));
            let got = total_weight(&prim(&graph));
            if got != expected {
                return Err(verification_failed(
                    self.name(),
                    "prim",
                    format!("total weight {} but kruskal found {}", got, expected),
                ));
            }
        }

        Ok(())
    }
}

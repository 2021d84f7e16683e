//! # Graph traversal
//!
//! Depth-first (recursive) and breadth-first (queue) traversal of an
//! adjacency list, timed on random trees.

pub mod bench;
pub mod code;
pub mod test;

pub use code::*;

use crate::config::TRAVERSAL_SIZES;
use crate::error::{verification_failed, Result};
use crate::generators::{balanced_tree, random_tree, unbalanced_tree};
use crate::graph::model::AdjacencyList;
use crate::registry::{LabRunner, VariantClosure};
use crate::utils::lab_rng;
use rand::rngs::StdRng;

/// Runner for the traversal lab
pub struct TraversalRunner;

/// `variant: A, B, C` for each variant on `graph` rooted at `root`.
fn describe_orders(title: &str, graph: &AdjacencyList, root: &str) -> Vec<String> {
    let Some(root) = graph.index_of(root) else {
        return Vec::new();
    };
    let mut lines = vec![format!("{} from {}:", title, graph.label(root))];
    for variant in code::available_variants() {
        let order = (variant.function)(graph, root);
        lines.push(format!("  {}: {}", variant.name, graph.labels_of(&order).join(", ")));
    }
    lines
}

impl LabRunner for TraversalRunner {
    fn name(&self) -> &'static str {
        "traversal"
    }

    fn description(&self) -> &'static str {
        "Depth-first and breadth-first traversal of random trees"
    }

    fn category(&self) -> &'static str {
        "graph"
    }

    fn size_label(&self) -> &'static str {
        "vertices"
    }

    fn default_sizes(&self) -> Vec<usize> {
        TRAVERSAL_SIZES.to_vec()
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn variant_closures<'a>(&'a self, size: usize, rng: &mut StdRng) -> Result<Vec<VariantClosure<'a>>> {
        Ok(bench::variant_closures(size, rng))
    }

    /// Every variant must visit each reachable vertex exactly once.
    fn verify(&self) -> Result<()> {
        let mut rng = lab_rng(Some(42));
        let mut graphs = vec![balanced_tree(), unbalanced_tree()];
        for size in [1, 10, 500] {
            graphs.push(random_tree(&mut rng, size));
        }

        for graph in &graphs {
            for variant in code::available_variants() {
                let mut order = (variant.function)(graph, 0);
                order.sort_unstable();
                order.dedup();
                if order.len() != graph.vertex_count() {
                    return Err(verification_failed(
                        self.name(),
                        variant.name,
                        format!("visited {} of {} vertices", order.len(), graph.vertex_count()),
                    ));
                }
            }
        }

        Ok(())
    }

    fn notes(&self) -> Vec<String> {
        let mut notes = describe_orders("Balanced tree", &balanced_tree(), "D");
        notes.extend(describe_orders("Unbalanced tree", &unbalanced_tree(), "D"));
        notes
    }
}

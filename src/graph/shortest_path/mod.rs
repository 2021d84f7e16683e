//! # Shortest paths
//!
//! Dijkstra (run from every source) against Floyd–Warshall on random
//! digraphs. The lab is registered once per edge density because the
//! crossover between the two depends on it.

pub mod bench;
pub mod code;
pub mod test;

pub use code::*;

use crate::config::{DENSE_COEFFICIENT, SHORTEST_PATH_SIZES, SPARSE_COEFFICIENT};
use crate::error::{verification_failed, Result};
use crate::generators::random_digraph;
use crate::registry::{LabRunner, VariantClosure};
use crate::utils::lab_rng;
use rand::rngs::StdRng;

/// Edge density of the generated digraphs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Density {
    Dense,
    Sparse,
}

impl Density {
    /// Chance out of 100 that an ordered pair is an edge.
    pub fn coefficient(self) -> u32 {
        match self {
            Density::Dense => DENSE_COEFFICIENT,
            Density::Sparse => SPARSE_COEFFICIENT,
        }
    }
}

/// Runner for one density of the shortest path lab
pub struct ShortestPathRunner {
    density: Density,
}

impl ShortestPathRunner {
    pub fn new(density: Density) -> Self {
        Self { density }
    }

    pub fn density(&self) -> Density {
        self.density
    }
}

impl LabRunner for ShortestPathRunner {
    fn name(&self) -> &'static str {
        match self.density {
            Density::Dense => "shortest_paths_dense",
            Density::Sparse => "shortest_paths_sparse",
        }
    }

    fn description(&self) -> &'static str {
        match self.density {
            Density::Dense => "All-pairs shortest paths on dense random digraphs",
            Density::Sparse => "All-pairs shortest paths on sparse random digraphs",
        }
    }

    fn category(&self) -> &'static str {
        "graph"
    }

    fn size_label(&self) -> &'static str {
        "vertices"
    }

    fn default_sizes(&self) -> Vec<usize> {
        SHORTEST_PATH_SIZES.to_vec()
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn variant_closures<'a>(&'a self, size: usize, rng: &mut StdRng) -> Result<Vec<VariantClosure<'a>>> {
        bench::variant_closures(size, self.density.coefficient(), rng)
    }

    fn verify(&self) -> Result<()> {
        let mut rng = lab_rng(Some(42));

        for size in [1, 2, 10, 40] {
            let graph = random_digraph(&mut rng, size, self.density.coefficient())?;
            let expected = floyd_warshall(&normalize_missing_edges(&graph.adjacency, &graph.weights));

            for source in 0..size {
                let got = dijkstra(&graph.adjacency, &graph.weights, source);
                if got.as_slice() != expected.row(source) {
                    return Err(verification_failed(
                        self.name(),
                        "dijkstra",
                        format!("distances from {} differ on a {}-vertex graph", source, size),
                    ));
                }
            }
        }

        Ok(())
    }

    fn notes(&self) -> Vec<String> {
        vec![format!("Edge coefficient: {}/100", self.density.coefficient())]
    }
}

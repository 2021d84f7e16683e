//! Timed closures for the spanning tree lab.

use std::rc::Rc;

use rand::rngs::StdRng;

use super::code::available_variants;
use crate::config::{UNDIRECTED_EDGE_PROBABILITY, UNDIRECTED_MAX_WEIGHT};
use crate::error::Result;
use crate::generators::random_undirected_graph;
use crate::graph::model::total_weight;
use crate::registry::VariantClosure;

/// One random undirected graph of `size` vertices shared by both variants.
///
/// The sample is the total weight of the tree found.
pub fn variant_closures(size: usize, rng: &mut StdRng) -> Result<Vec<VariantClosure<'static>>> {
    let graph = Rc::new(random_undirected_graph(
        rng,
        size,
        UNDIRECTED_MAX_WEIGHT,
        UNDIRECTED_EDGE_PROBABILITY,
    )?);

    Ok(available_variants()
        .into_iter()
        .map(|v| {
            let func = v.function;
            let graph = Rc::clone(&graph);
            VariantClosure {
                name: v.name,
                description: v.description,
                run: Box::new(move || -> Result<Option<f64>> { Ok(Some(total_weight(&func(&graph)) as f64)) }),
            }
        })
        .collect())
}

//! Timed closures for the shortest path labs.

use std::rc::Rc;

use rand::rngs::StdRng;

use super::code::available_variants;
use crate::error::Result;
use crate::generators::random_digraph;
use crate::graph::model::{WeightMatrix, INFINITY};
use crate::registry::VariantClosure;

/// Sum of every finite distance; equal across variants on the same graph.
pub fn finite_distance_sum(distances: &WeightMatrix) -> u64 {
    (0..distances.size())
        .flat_map(|i| distances.row(i).iter().copied())
        .filter(|&d| d != INFINITY)
        .fold(0u64, u64::saturating_add)
}

/// One random digraph of `size` vertices at `coefficient`, shared by both
/// variants.
pub fn variant_closures(size: usize, coefficient: u32, rng: &mut StdRng) -> Result<Vec<VariantClosure<'static>>> {
    let graph = Rc::new(random_digraph(rng, size, coefficient)?);

    Ok(available_variants()
        .into_iter()
        .map(|v| {
            let func = v.function;
            let graph = Rc::clone(&graph);
            VariantClosure {
                name: v.name,
                description: v.description,
                run: Box::new(move || -> Result<Option<f64>> {
                    Ok(Some(finite_distance_sum(&func(&graph)) as f64))
                }),
            }
        })
        .collect())
}

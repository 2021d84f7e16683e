//! Timed closures for the traversal lab.

use std::rc::Rc;

use rand::rngs::StdRng;

use super::code::available_variants;
use crate::error::Result;
use crate::generators::random_tree;
use crate::registry::VariantClosure;

/// Random tree of `size` vertices, traversed from vertex 0 by every variant.
///
/// The sample is the number of vertices visited.
pub fn variant_closures(size: usize, rng: &mut StdRng) -> Vec<VariantClosure<'static>> {
    let tree = Rc::new(random_tree(rng, size));

    available_variants()
        .into_iter()
        .map(|v| {
            let func = v.function;
            let tree = Rc::clone(&tree);
            VariantClosure {
                name: v.name,
                description: v.description,
                run: Box::new(move || -> Result<Option<f64>> {
                    if tree.vertex_count() == 0 {
                        return Ok(Some(0.0));
                    }
                    Ok(Some(func(&tree, 0).len() as f64))
                }),
            }
        })
        .collect()
}

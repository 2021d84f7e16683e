//! Input generation and timed closures for the sorting lab.

use std::rc::Rc;

use rand::rngs::StdRng;

use super::code::available_variants;
use crate::config::{SORT_VALUE_MAX, SORT_VALUE_MIN};
use crate::error::Result;
use crate::generators::random_integer_array;
use crate::registry::VariantClosure;

/// Random array of `size` values in the lab's key range.
pub fn generate_input(rng: &mut StdRng, size: usize) -> Vec<i64> {
    random_integer_array(rng, size, SORT_VALUE_MIN, SORT_VALUE_MAX)
}

/// One closure per sort, all reading the same array.
///
/// The sample is the median of the sorted output.
pub fn variant_closures(size: usize, rng: &mut StdRng) -> Vec<VariantClosure<'static>> {
    let input = Rc::new(generate_input(rng, size));

    available_variants()
        .into_iter()
        .map(|v| {
            let func = v.function;
            let input = Rc::clone(&input);
            VariantClosure {
                name: v.name,
                description: v.description,
                run: Box::new(move || -> Result<Option<f64>> {
                    let sorted = func(&input);
                    Ok(sorted.get(sorted.len() / 2).map(|&m| m as f64))
                }),
            }
        })
        .collect()
}

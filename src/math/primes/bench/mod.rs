//! Timed closures for the sieve lab. The instance is just the bound `n`.

use super::code::available_variants;
use crate::error::Result;
use crate::registry::VariantClosure;

/// One closure per sieve; the sample is the number of primes found.
pub fn variant_closures(n: usize) -> Vec<VariantClosure<'static>> {
    available_variants()
        .into_iter()
        .map(|v| {
            let func = v.function;
            VariantClosure {
                name: v.name,
                description: v.description,
                run: Box::new(move || -> Result<Option<f64>> {
                    let count = func(n).iter().filter(|&&p| p).count();
                    Ok(Some(count as f64))
                }),
            }
        })
        .collect()
}

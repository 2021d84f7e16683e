//! Timed closures for the Fibonacci lab.

use super::code::{available_variants, MAX_INDEX};
use crate::error::{invalid_parameter, Result};
use crate::registry::VariantClosure;

/// One closure per variant, all computing `F(size)`.
pub fn variant_closures(size: usize) -> Result<Vec<VariantClosure<'static>>> {
    let n = u32::try_from(size)
        .ok()
        .filter(|&n| n <= MAX_INDEX)
        .ok_or_else(|| invalid_parameter("n", &size, &format!("Fibonacci index must be at most {}", MAX_INDEX)))?;

    Ok(available_variants()
        .into_iter()
        .map(|v| {
            let func = v.function;
            VariantClosure {
                name: v.name,
                description: v.description,
                run: Box::new(move || -> Result<Option<f64>> { Ok(Some(func(n) as f64)) }),
            }
        })
        .collect())
}

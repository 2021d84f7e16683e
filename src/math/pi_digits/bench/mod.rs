//! Timed closures for the pi digit lab.

use super::code::available_variants;
use crate::error::{invalid_parameter, Result};
use crate::registry::VariantClosure;

/// One closure per variant, all extracting the digit at `size`.
pub fn variant_closures(size: usize) -> Result<Vec<VariantClosure<'static>>> {
    let index = i64::try_from(size).map_err(|_| invalid_parameter("index", &size, &"does not fit in i64"))?;

    Ok(available_variants()
        .into_iter()
        .map(|v| {
            let func = v.function;
            VariantClosure {
                name: v.name,
                description: v.description,
                run: Box::new(move || -> Result<Option<f64>> { Ok(Some(f64::from(func(index)?))) }),
            }
        })
        .collect())
}

//! # Sorting
//!
//! Merge, quick, heap and counting sort over `i64` keys.
//!
//! Counting sort trades memory for time: its table spans the key range
//! (`-10000..=10000` in the timed runs) regardless of input length.

pub mod bench;
pub mod code;
pub mod test;

pub use code::*;

use crate::config::{SORT_SIZE_END, SORT_SIZE_START, SORT_SIZE_STEP};
use crate::error::{verification_failed, Result};
use crate::generators::{random_integer_array, size_range};
use crate::registry::{LabRunner, VariantClosure};
use crate::utils::lab_rng;
use rand::rngs::StdRng;

/// Runner for the sorting lab
pub struct SortRunner;

impl LabRunner for SortRunner {
    fn name(&self) -> &'static str {
        "sorting"
    }

    fn description(&self) -> &'static str {
        "Sorts random integer arrays with four classic algorithms"
    }

    fn category(&self) -> &'static str {
        "sorting"
    }

    fn size_label(&self) -> &'static str {
        "array size"
    }

    fn default_sizes(&self) -> Vec<usize> {
        size_range(SORT_SIZE_START, SORT_SIZE_END, SORT_SIZE_STEP).unwrap_or_default()
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn variant_closures<'a>(&'a self, size: usize, rng: &mut StdRng) -> Result<Vec<VariantClosure<'a>>> {
        Ok(bench::variant_closures(size, rng))
    }

    fn verify(&self) -> Result<()> {
        let mut rng = lab_rng(Some(42));
        let mut inputs = vec![vec![], vec![7], vec![3, 3, 3], vec![5, -1, 4, -1, 0]];
        for size in [10, 100, 1000] {
            inputs.push(random_integer_array(&mut rng, size, -50, 50));
        }

        for input in &inputs {
            let mut expected = input.clone();
            expected.sort();

            for variant in code::available_variants() {
                let got = (variant.function)(input);
                if got != expected {
                    return Err(verification_failed(
                        self.name(),
                        variant.name,
                        format!("wrong order for input of length {}", input.len()),
                    ));
                }
            }
        }

        Ok(())
    }
}

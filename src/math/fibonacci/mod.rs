//! # Fibonacci
//!
//! Six ways to compute `F(n)`, from the textbook loop to closed forms:
//!
//! - **iterative / iterative_memoization / dynamic**: linear in `n`
//! - **eigen_optimized**: `O(log n)` multiplications in ℤ[φ], exact
//! - **eigen / golden_ratio**: constant work in `f64`, exact only for small `n`

pub mod bench;
pub mod code;
pub mod test;

pub use code::*;

use crate::config::{FIBONACCI_FLOAT_EXACT_LIMIT, FIBONACCI_SIZES};
use crate::error::{verification_failed, Result};
use crate::registry::{LabRunner, VariantClosure};
use rand::rngs::StdRng;

/// Runner for the Fibonacci lab
pub struct FibonacciRunner;

impl LabRunner for FibonacciRunner {
    fn name(&self) -> &'static str {
        "fibonacci"
    }

    fn description(&self) -> &'static str {
        "Computes the n-th Fibonacci number six different ways"
    }

    fn category(&self) -> &'static str {
        "math"
    }

    fn size_label(&self) -> &'static str {
        "n"
    }

    fn default_sizes(&self) -> Vec<usize> {
        FIBONACCI_SIZES.to_vec()
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn variant_closures<'a>(&'a self, size: usize, _rng: &mut StdRng) -> Result<Vec<VariantClosure<'a>>> {
        bench::variant_closures(size)
    }

    fn verify(&self) -> Result<()> {
        let variants = code::available_variants();
        let reference = fibonacci_iterative;

        for variant in &variants {
            let limit = if FLOAT_VARIANTS.contains(&variant.name) {
                FIBONACCI_FLOAT_EXACT_LIMIT
            } else {
                MAX_INDEX
            };

            for n in 0..=limit {
                let expected = reference(n);
                let got = (variant.function)(n);
                if got != expected {
                    return Err(verification_failed(
                        self.name(),
                        variant.name,
                        format!("F({}) expected {}, got {}", n, expected, got),
                    ));
                }
            }
        }

        Ok(())
    }
}

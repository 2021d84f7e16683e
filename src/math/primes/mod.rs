//! # Primality sieves
//!
//! Five ways to flag the primes up to `n`, from Eratosthenes to plain trial
//! division. All produce identical tables; they differ only in how much
//! redundant work they do.

pub mod bench;
pub mod code;
pub mod test;

pub use code::*;

use crate::config::SIEVE_SIZES;
use crate::error::{verification_failed, Result};
use crate::registry::{LabRunner, VariantClosure};
use rand::rngs::StdRng;

/// Runner for the sieve lab
pub struct SieveRunner;

impl LabRunner for SieveRunner {
    fn name(&self) -> &'static str {
        "primes"
    }

    fn description(&self) -> &'static str {
        "Flags primes up to n with five sieve variants"
    }

    fn category(&self) -> &'static str {
        "math"
    }

    fn size_label(&self) -> &'static str {
        "n"
    }

    fn default_sizes(&self) -> Vec<usize> {
        SIEVE_SIZES.to_vec()
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn variant_closures<'a>(&'a self, size: usize, _rng: &mut StdRng) -> Result<Vec<VariantClosure<'a>>> {
        Ok(bench::variant_closures(size))
    }

    fn verify(&self) -> Result<()> {
        let variants = code::available_variants();
        let reference = sieve_unmarked_multiples;

        for n in (0..=200).chain([997, 1000]) {
            let expected = reference(n);
            for variant in &variants {
                let got = (variant.function)(n);
                if got != expected {
                    return Err(verification_failed(
                        self.name(),
                        variant.name,
                        format!("table differs from reference at n = {}", n),
                    ));
                }
            }
        }

        Ok(())
    }
}

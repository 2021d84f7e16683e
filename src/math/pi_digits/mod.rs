//! # Digits of π
//!
//! Extracts the decimal digit of π at a given index (index 0 is the leading
//! `3`) three ways:
//!
//! - **bbp**: Bailey–Borwein–Plouffe series summed in fixed point
//! - **legendre**: Gauss–Legendre AGM, quadratic convergence
//! - **spigot**: Rabinowitz–Wagon, integer-only and streaming
//!
//! The fixed point variants carry a few guard digits past the requested
//! index so truncation error never reaches it.

pub mod bench;
pub mod code;
pub mod test;

pub use code::*;

use crate::config::PI_DIGIT_SIZES;
use crate::error::{verification_failed, Result};
use crate::registry::{LabRunner, VariantClosure};
use rand::rngs::StdRng;

/// Runner for the pi digit lab
pub struct PiDigitRunner;

impl LabRunner for PiDigitRunner {
    fn name(&self) -> &'static str {
        "pi_digits"
    }

    fn description(&self) -> &'static str {
        "Finds the n-th decimal digit of pi three ways"
    }

    fn category(&self) -> &'static str {
        "math"
    }

    fn size_label(&self) -> &'static str {
        "digit index"
    }

    fn default_sizes(&self) -> Vec<usize> {
        PI_DIGIT_SIZES.to_vec()
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn variant_closures<'a>(&'a self, size: usize, _rng: &mut StdRng) -> Result<Vec<VariantClosure<'a>>> {
        bench::variant_closures(size)
    }

    fn verify(&self) -> Result<()> {
        let reference = pi_digits_spigot(121);

        for variant in code::available_variants() {
            for (index, &expected) in reference.iter().enumerate() {
                let got = (variant.function)(index as i64)?;
                if got != expected {
                    return Err(verification_failed(
                        self.name(),
                        variant.name,
                        format!("digit {} expected {}, got {}", index, expected, got),
                    ));
                }
            }
        }

        Ok(())
    }
}

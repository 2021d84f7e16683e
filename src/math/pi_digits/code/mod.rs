//! Digit-of-π implementations.

mod bbp;
mod legendre;
mod spigot;

pub use bbp::{pi_digit_bbp, pi_fixed_bbp};
pub use legendre::{pi_digit_legendre, pi_fixed_legendre};
pub use spigot::{pi_digit_spigot, pi_digits_spigot};

use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::error::{LabError, Result};
use crate::utils::VariantInfo;

/// Digit at a signed index; negative indices are rejected.
pub type DigitFn = fn(i64) -> Result<u8>;

pub fn available_variants() -> Vec<VariantInfo<DigitFn>> {
    vec![
        VariantInfo {
            name: "bbp",
            description: "Bailey–Borwein–Plouffe series",
            function: pi_digit_bbp,
        },
        VariantInfo {
            name: "legendre",
            description: "Gauss–Legendre AGM iteration",
            function: pi_digit_legendre,
        },
        VariantInfo {
            name: "spigot",
            description: "Rabinowitz–Wagon streaming spigot",
            function: pi_digit_spigot,
        },
    ]
}

fn check_index(index: i64) -> Result<usize> {
    usize::try_from(index).map_err(|_| LabError::NegativeDigitIndex { index })
}

fn power_of_ten(exponent: usize) -> BigInt {
    num_traits::pow(BigInt::from(10u32), exponent)
}

/// Digit of `fixed / 10^guard` in the units place.
fn digit_of_fixed(fixed: &BigInt, guard: usize) -> u8 {
    let truncated = fixed / power_of_ten(guard);
    (truncated % 10u32).to_u8().unwrap_or_default()
}

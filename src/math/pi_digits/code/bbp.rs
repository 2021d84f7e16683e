//! Bailey–Borwein–Plouffe series in decimal fixed point.

use num_bigint::BigInt;
use num_traits::Zero;

use super::{check_index, digit_of_fixed, power_of_ten};
use crate::config::PI_GUARD_DIGITS;
use crate::error::Result;

/// π scaled by `10^precision`, truncated.
///
/// Sums `16^-k (4/(8k+1) - 2/(8k+4) - 1/(8k+5) - 1/(8k+6))` until the
/// terms vanish at this precision.
pub fn pi_fixed_bbp(precision: usize) -> BigInt {
    let scale = power_of_ten(precision);
    let mut sum = BigInt::zero();

    for k in 0u64.. {
        let base = 8 * k;
        let inner = (&scale * 4u32) / (base + 1)
            - (&scale * 2u32) / (base + 4)
            - &scale / (base + 5)
            - &scale / (base + 6);
        let term = inner >> (4 * k as usize);
        if term.is_zero() {
            break;
        }
        sum += term;
    }
    sum
}

/// Decimal digit of π at `index` (0 is the leading 3).
pub fn pi_digit_bbp(index: i64) -> Result<u8> {
    let n = check_index(index)?;
    Ok(digit_of_fixed(&pi_fixed_bbp(n + PI_GUARD_DIGITS), PI_GUARD_DIGITS))
}

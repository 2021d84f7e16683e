//! Gauss–Legendre arithmetic-geometric mean iteration.

use num_bigint::BigInt;

use super::{check_index, digit_of_fixed, power_of_ten};
use crate::config::PI_GUARD_DIGITS;
use crate::error::Result;

/// π scaled by `10^precision`.
///
/// Each round roughly doubles the number of correct digits, so
/// `bits(precision) + 2` rounds are enough.
pub fn pi_fixed_legendre(precision: usize) -> BigInt {
    let scale = power_of_ten(precision);
    let rounds = usize::BITS - precision.leading_zeros() + 2;

    let mut a = scale.clone();
    let mut b = (&scale * &scale / 2u32).sqrt();
    let mut t = &scale / 4u32;
    let mut p = BigInt::from(1u32);

    for _ in 0..rounds {
        if a == b {
            break;
        }
        let a_next = (&a + &b) / 2u32;
        b = (&a * &b).sqrt();
        let gap = &a - &a_next;
        t -= &p * &gap * &gap / &scale;
        a = a_next;
        p *= 2u32;
    }

    let sum = &a + &b;
    &sum * &sum / (t * 4u32)
}

/// Decimal digit of π at `index` (0 is the leading 3).
pub fn pi_digit_legendre(index: i64) -> Result<u8> {
    let n = check_index(index)?;
    Ok(digit_of_fixed(&pi_fixed_legendre(n + PI_GUARD_DIGITS), PI_GUARD_DIGITS))
}

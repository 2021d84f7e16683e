//! Rabinowitz–Wagon streaming spigot.

use super::check_index;
use crate::error::Result;

/// Extra rounds run past the requested count so a pending run of nines
/// (or a held-back predigit) is resolved before the output is cut.
const LOOKAHEAD: usize = 10;

/// First `count` decimal digits of π, leading 3 included.
///
/// Works in a mixed-radix representation sized for `count + LOOKAHEAD`
/// rounds. A produced digit is held back as a predigit while later digits
/// may still carry into it (runs of 9 followed by a 10); generation stops
/// as soon as `count` digits are settled.
pub fn pi_digits_spigot(count: usize) -> Vec<u8> {
    let rounds = count + LOOKAHEAD;
    let len = rounds * 10 / 3 + 1;
    let mut cells = vec![2u64; len];
    // digits[0] is the 0 emitted in front of the 3
    let mut digits = Vec::with_capacity(count + 1);
    let mut predigit = 0u8;
    let mut nines = 0usize;

    for _ in 0..rounds {
        if digits.len() > count {
            break;
        }

        let mut carry = 0u64;
        for i in (1..=len as u64).rev() {
            let cell = &mut cells[(i - 1) as usize];
            let x = 10 * *cell + carry * i;
            let radix = 2 * i - 1;
            *cell = x % radix;
            carry = x / radix;
        }
        cells[0] = carry % 10;
        let q = (carry / 10) as u8;

        match q {
            9 => nines += 1,
            10 => {
                digits.push(predigit + 1);
                digits.extend(std::iter::repeat(0).take(nines));
                predigit = 0;
                nines = 0;
            }
            _ => {
                digits.push(predigit);
                predigit = q;
                digits.extend(std::iter::repeat(9).take(nines));
                nines = 0;
            }
        }
    }
    digits.push(predigit);
    digits.extend(std::iter::repeat(9).take(nines));

    digits.remove(0);
    digits.truncate(count);
    debug_assert_eq!(digits.len(), count);
    digits
}

/// Decimal digit of π at `index` (0 is the leading 3).
pub fn pi_digit_spigot(index: i64) -> Result<u8> {
    let n = check_index(index)?;
    Ok(pi_digits_spigot(n + 1)[n])
}

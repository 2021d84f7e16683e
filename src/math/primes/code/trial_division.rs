//! Per-number trial division.

use super::marking::initial_table;

/// Test each `i` against every `j` in `2..i`.
pub fn trial_division_full(n: usize) -> Vec<bool> {
    let mut is_prime = initial_table(n);
    for i in 2..=n {
        for j in 2..i {
            if i % j == 0 {
                is_prime[i] = false;
                break;
            }
        }
    }
    is_prime
}

/// Test each `i` against every `j` with `j * j <= i`.
pub fn trial_division_sqrt(n: usize) -> Vec<bool> {
    let mut is_prime = initial_table(n);
    for i in 2..=n {
        let mut j = 2;
        while j * j <= i {
            if i % j == 0 {
                is_prime[i] = false;
                break;
            }
            j += 1;
        }
    }
    is_prime
}

//! Sieves that cross out multiples.

/// Sieve of Eratosthenes: cross out multiples of each `i` that is still
/// marked prime.
pub fn sieve_unmarked_multiples(n: usize) -> Vec<bool> {
    let mut is_prime = initial_table(n);
    for i in 2..=n {
        if is_prime[i] {
            for multiple in (2 * i..=n).step_by(i) {
                is_prime[multiple] = false;
            }
        }
    }
    is_prime
}

/// Cross out multiples of every `i`, whether or not `i` is already crossed
/// out.
pub fn sieve_all_multiples(n: usize) -> Vec<bool> {
    let mut is_prime = initial_table(n);
    for i in 2..=n {
        for multiple in (2 * i..=n).step_by(i) {
            is_prime[multiple] = false;
        }
    }
    is_prime
}

/// For each `i` still marked prime, test every larger `j` for divisibility
/// by `i`.
pub fn sieve_divisibility_scan(n: usize) -> Vec<bool> {
    let mut is_prime = initial_table(n);
    for i in 2..=n {
        if !is_prime[i] {
            continue;
        }
        for j in (i + 1)..=n {
            if j % i == 0 {
                is_prime[j] = false;
            }
        }
    }
    is_prime
}

/// `n + 1` flags, all `true` except indices 0 and 1.
pub(super) fn initial_table(n: usize) -> Vec<bool> {
    let mut table = vec![true; n + 1];
    for flag in table.iter_mut().take(2) {
        *flag = false;
    }
    table
}

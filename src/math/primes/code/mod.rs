//! Primality sieve implementations.
//!
//! Every variant returns `n + 1` flags where `flags[i]` is `true` iff `i` is
//! prime.

mod marking;
mod trial_division;

pub use marking::{sieve_all_multiples, sieve_divisibility_scan, sieve_unmarked_multiples};
pub use trial_division::{trial_division_full, trial_division_sqrt};

use crate::utils::VariantInfo;

pub type SieveFn = fn(usize) -> Vec<bool>;

/// Sieve variants; the first one is the reference.
pub fn available_variants() -> Vec<VariantInfo<SieveFn>> {
    vec![
        VariantInfo {
            name: "eratosthenes",
            description: "Cross out multiples of unmarked numbers",
            function: sieve_unmarked_multiples,
        },
        VariantInfo {
            name: "all_multiples",
            description: "Cross out multiples of every number",
            function: sieve_all_multiples,
        },
        VariantInfo {
            name: "divisibility_scan",
            description: "Test later numbers for divisibility",
            function: sieve_divisibility_scan,
        },
        VariantInfo {
            name: "trial_division",
            description: "Divide by every smaller number",
            function: trial_division_full,
        },
        VariantInfo {
            name: "trial_division_sqrt",
            description: "Divide up to the square root",
            function: trial_division_sqrt,
        },
    ]
}

/// Indices flagged prime.
pub fn primes_from_flags(flags: &[bool]) -> Vec<usize> {
    flags
        .iter()
        .enumerate()
        .filter_map(|(i, &prime)| prime.then_some(i))
        .collect()
}

//! Number-theoretic and numeric labs.

pub mod fibonacci;
pub mod pi_digits;
pub mod primes;

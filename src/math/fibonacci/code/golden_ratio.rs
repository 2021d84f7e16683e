//! Closed-form Fibonacci.

/// Binet's formula `(φ^n - ψ^n) / √5` in `f64`, rounded to nearest.
///
/// Exact at least up to `n = 60`.
pub fn fibonacci_golden_ratio(n: u32) -> u128 {
    let sqrt_five = 5f64.sqrt();
    let phi = (1.0 + sqrt_five) / 2.0;
    let psi = (1.0 - sqrt_five) / 2.0;
    ((phi.powi(n as i32) - psi.powi(n as i32)) / sqrt_five).round() as u128
}

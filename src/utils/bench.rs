//! Shared benchmark utilities.
//!
//! RNG construction for the input generators and the small statistics the
//! reports need.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

/// RNG for a run: seeded when a seed is given, from the OS otherwise.
pub fn lab_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Mean of a list of durations (zero when empty)
pub fn mean(times: &[Duration]) -> Duration {
    if times.is_empty() {
        return Duration::ZERO;
    }
    let total: Duration = times.iter().sum();
    total / times.len() as u32
}

/// Compute (mean, min, max) from a list of durations
pub fn compute_stats(times: &[Duration]) -> (Duration, Duration, Duration) {
    let min = times.iter().min().copied().unwrap_or(Duration::ZERO);
    let max = times.iter().max().copied().unwrap_or(Duration::ZERO);
    (mean(times), min, max)
}

/// Elapsed time in microseconds, rounded to 4 decimals.
pub fn as_micros_f64(d: Duration) -> f64 {
    (d.as_secs_f64() * 1e6 * 1e4).round() / 1e4
}

/// Render a measurement with a unit suited to its magnitude
pub fn format_measurement(d: Duration) -> String {
    let nanos = d.as_nanos();
    if nanos < 1_000 {
        format!("{} ns", nanos)
    } else if nanos < 1_000_000 {
        format!("{:.2} µs", nanos as f64 / 1e3)
    } else if nanos < 1_000_000_000 {
        format!("{:.2} ms", nanos as f64 / 1e6)
    } else {
        format!("{:.3} s", d.as_secs_f64())
    }
}

//! Utility modules for timing, reporting and execution.

pub mod bench;
pub mod cpu_affinity;
pub mod runner;
pub mod timer;
pub mod tui;

// Re-export commonly used items
pub use bench::{compute_stats, format_measurement, lab_rng};
pub use cpu_affinity::CpuPinGuard;
pub use timer::{measure_lab, run_lab, PinStrategy, TimingConfig, TimingRecord, TimingSeries, TimingTable};

/// Information about an algorithm variant.
/// Generic over F which is the function signature.
pub struct VariantInfo<F> {
    /// Unique identifier for this variant (e.g., "merge_sort")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// The specific implementation function
    pub function: F,
}

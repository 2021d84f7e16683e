//! Fibonacci implementations.

mod dynamic;
mod eigen;
mod golden_ratio;
mod iterative;

pub use dynamic::fibonacci_dynamic;
pub use eigen::{fibonacci_eigen, fibonacci_eigen_optimized};
pub use golden_ratio::fibonacci_golden_ratio;
pub use iterative::{fibonacci_iterative, fibonacci_iterative_memoization};

use crate::utils::VariantInfo;

/// Signature shared by every Fibonacci variant
pub type FibonacciFn = fn(u32) -> u128;

/// Largest index whose Fibonacci number fits in `u128`.
pub const MAX_INDEX: u32 = 186;

/// Variants in timing order; `iterative` is the reference.
pub fn available_variants() -> Vec<VariantInfo<FibonacciFn>> {
    vec![
        VariantInfo {
            name: "iterative",
            description: "Two running terms",
            function: fibonacci_iterative,
        },
        VariantInfo {
            name: "iterative_memoization",
            description: "Growing table of every term",
            function: fibonacci_iterative_memoization,
        },
        VariantInfo {
            name: "dynamic",
            description: "Top-down recursion over a memo table",
            function: fibonacci_dynamic,
        },
        VariantInfo {
            name: "eigen",
            description: "Eigendecomposition of [[1,1],[1,0]] in f64",
            function: fibonacci_eigen,
        },
        VariantInfo {
            name: "eigen_optimized",
            description: "Square-and-multiply in Z[phi]",
            function: fibonacci_eigen_optimized,
        },
        VariantInfo {
            name: "golden_ratio",
            description: "Binet's formula in f64",
            function: fibonacci_golden_ratio,
        },
    ]
}

/// Variants computed in `f64`, only exact for small indices.
pub const FLOAT_VARIANTS: [&str; 2] = ["eigen", "golden_ratio"];

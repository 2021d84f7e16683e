//! Sorting implementations.

mod counting;
mod heap;
mod merge;
mod quick;

pub use counting::{counting_sort, MAX_KEY_RANGE};
pub use heap::heap_sort;
pub use merge::merge_sort;
pub use quick::{quick_sort, quick_sort_with_rng};

use crate::utils::VariantInfo;

/// Signature shared by every sort: borrow the input, return a sorted copy
pub type SortFn = fn(&[i64]) -> Vec<i64>;

/// Variants in timing order; `merge_sort` is the reference.
pub fn available_variants() -> Vec<VariantInfo<SortFn>> {
    vec![
        VariantInfo {
            name: "merge_sort",
            description: "Top-down stable merge sort",
            function: merge_sort,
        },
        VariantInfo {
            name: "quick_sort",
            description: "Random pivot, three-way partition",
            function: quick_sort,
        },
        VariantInfo {
            name: "heap_sort",
            description: "Max heap with repeated extraction",
            function: heap_sort,
        },
        VariantInfo {
            name: "counting_sort",
            description: "Frequency table over the key range",
            function: counting_sort,
        },
    ]
}

//! Per-lab constants: size sequences, densities and weight ranges.
//!
//! Labs take no configuration file; these are the values a run uses unless
//! the command line overrides the size sequence.

/// Fibonacci indices timed by the Fibonacci lab.
pub const FIBONACCI_SIZES: [usize; 9] = [1, 10, 20, 30, 40, 50, 60, 70, 80];

/// Largest index at which the floating point Fibonacci variants are exact.
pub const FIBONACCI_FLOAT_EXACT_LIMIT: u32 = 60;

/// Array sizes for the sorting lab: 500 to 6000 in steps of 500.
pub const SORT_SIZE_START: usize = 500;
/// Last sorting size (inclusive).
pub const SORT_SIZE_END: usize = 6000;
/// Step between sorting sizes.
pub const SORT_SIZE_STEP: usize = 500;
/// Smallest value drawn for sorting inputs.
pub const SORT_VALUE_MIN: i64 = -10_000;
/// Largest value drawn for sorting inputs.
pub const SORT_VALUE_MAX: i64 = 10_000;

/// Sieve bounds: 1000 to 5000 in steps of 1000.
pub const SIEVE_SIZES: [usize; 5] = [1000, 2000, 3000, 4000, 5000];

/// Random tree sizes for the traversal lab.
pub const TRAVERSAL_SIZES: [usize; 5] = [1_000, 5_000, 10_000, 50_000, 100_000];

/// Vertex counts for the shortest path labs.
pub const SHORTEST_PATH_SIZES: [usize; 5] = [10, 50, 100, 200, 300];
/// Edge coefficient (out of 100) for dense digraphs.
pub const DENSE_COEFFICIENT: u32 = 80;
/// Edge coefficient (out of 100) for sparse digraphs.
pub const SPARSE_COEFFICIENT: u32 = 30;
/// Smallest directed edge weight.
pub const DIGRAPH_WEIGHT_MIN: u64 = 10;
/// Largest directed edge weight.
pub const DIGRAPH_WEIGHT_MAX: u64 = 100;

/// Vertex counts for the spanning tree lab: 100 to 1000 in steps of 100.
pub const SPANNING_TREE_SIZES: [usize; 10] = [100, 200, 300, 400, 500, 600, 700, 800, 900, 1000];
/// Largest undirected edge weight.
pub const UNDIRECTED_MAX_WEIGHT: u64 = 10;
/// Probability that an undirected edge exists.
pub const UNDIRECTED_EDGE_PROBABILITY: f64 = 0.5;

/// Digit indices for the pi lab.
pub const PI_DIGIT_SIZES: [usize; 5] = [10, 50, 100, 200, 300];

/// Extra decimal digits carried by the fixed point pi variants.
pub const PI_GUARD_DIGITS: usize = 12;

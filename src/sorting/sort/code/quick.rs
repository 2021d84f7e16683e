//! Randomised three-way quicksort.

use rand::Rng;

/// Quicksort around a uniformly random pivot, splitting into
/// less / equal / greater partitions and recursing on the outer two.
pub fn quick_sort(input: &[i64]) -> Vec<i64> {
    quick_sort_with_rng(input, &mut rand::rng())
}

/// [`quick_sort`] with a caller-supplied pivot source.
pub fn quick_sort_with_rng<R: Rng + ?Sized>(input: &[i64], rng: &mut R) -> Vec<i64> {
    if input.len() <= 1 {
        return input.to_vec();
    }

    let pivot = input[rng.random_range(0..input.len())];
    let mut less = Vec::new();
    let mut equal = Vec::new();
    let mut greater = Vec::new();
    for &x in input {
        if x < pivot {
            less.push(x);
        } else if x == pivot {
            equal.push(x);
        } else {
            greater.push(x);
        }
    }

    let mut sorted = quick_sort_with_rng(&less, rng);
    sorted.extend_from_slice(&equal);
    sorted.extend(quick_sort_with_rng(&greater, rng));
    sorted
}

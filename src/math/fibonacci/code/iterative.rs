//! Bottom-up Fibonacci variants.

/// `F(n)` by updating the last two terms in place.
///
/// Overflows `u128` for `n > 186`.
pub fn fibonacci_iterative(n: u32) -> u128 {
    if n == 0 {
        return 0;
    }
    let (mut previous, mut current) = (0u128, 1u128);
    for _ in 1..n {
        let next = previous + current;
        previous = current;
        current = next;
    }
    current
}

/// `F(n)` by growing a table of every term up to `n`.
///
/// Overflows `u128` for `n > 186`.
pub fn fibonacci_iterative_memoization(n: u32) -> u128 {
    let mut table: Vec<u128> = vec![0, 1];
    for i in 2..=n as usize {
        let next = table[i - 1] + table[i - 2];
        table.push(next);
    }
    table[n as usize]
}

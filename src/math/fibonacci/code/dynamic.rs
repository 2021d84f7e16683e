//! Top-down Fibonacci over a memo table.

/// `F(n)` by memoised recursion: each term is computed once and cached.
///
/// Overflows `u128` for `n > 186`.
pub fn fibonacci_dynamic(n: u32) -> u128 {
    let mut memo = vec![None; n as usize + 1];
    fib_memo(n as usize, &mut memo)
}

fn fib_memo(n: usize, memo: &mut [Option<u128>]) -> u128 {
    if n < 2 {
        return n as u128;
    }
    if let Some(value) = memo[n] {
        return value;
    }
    let value = fib_memo(n - 1, memo) + fib_memo(n - 2, memo);
    memo[n] = Some(value);
    value
}

//! Matrix-power Fibonacci variants.
//!
//! `[[1, 1], [1, 0]]^n = [[F(n+1), F(n)], [F(n), F(n-1)]]`.

/// Eigenvalues and unit eigenvectors of a symmetric 2x2 matrix `[[a, b], [b, d]]`.
fn symmetric_eigen(a: f64, b: f64, d: f64) -> [(f64, [f64; 2]); 2] {
    let trace = a + d;
    let det = a * d - b * b;
    let disc = (trace * trace / 4.0 - det).sqrt();
    let pair = |lambda: f64| {
        let (x, y) = (b, lambda - a);
        let norm = (x * x + y * y).sqrt();
        (lambda, [x / norm, y / norm])
    };
    [pair(trace / 2.0 + disc), pair(trace / 2.0 - disc)]
}

/// `F(n)` as the off-diagonal entry of `V diag(λ^n) Vᵀ`, in `f64`.
///
/// Exact at least up to `n = 60`; rounding error grows beyond that.
pub fn fibonacci_eigen(n: u32) -> u128 {
    let eigen = symmetric_eigen(1.0, 1.0, 0.0);
    let off_diagonal: f64 = eigen
        .iter()
        .map(|(lambda, v)| lambda.powi(n as i32) * v[0] * v[1])
        .sum();
    off_diagonal.round().max(0.0) as u128
}

/// `(a, b)` stands for `aφ + b` in ℤ[φ], where `φ² = φ + 1`.
type Golden = (u128, u128);

fn multiply((a, b): Golden, (x, y): Golden) -> Golden {
    (x * (a + b) + a * y, a * x + b * y)
}

fn square((a, b): Golden) -> Golden {
    (a * a + ((a * b) << 1), a * a + b * b)
}

/// `F(n)` exactly, as the φ coefficient of `φ^n = F(n)φ + F(n-1)`,
/// by square-and-multiply in ℤ[φ].
///
/// Overflows `u128` for `n > 186`.
pub fn fibonacci_eigen_optimized(n: u32) -> u128 {
    let mut result: Golden = (0, 1);
    let mut base: Golden = (1, 0);
    let mut exponent = n;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = multiply(result, base);
        }
        exponent >>= 1;
        if exponent > 0 {
            base = square(base);
        }
    }
    result.0
}

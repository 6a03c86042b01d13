//! Fibonacci numbers, plus the identity helper used for warm-up.

use std::hint::black_box;

use crate::diagnostics::CalcError;
use crate::MAX_RECURSION_DEPTH;

/// Number of `func` calls in the warm-up loop: `2^20`.
pub const WARM_UP_ITERATIONS: u64 = 1 << 20;

/// Largest `n` whose Fibonacci number fits in an `i64`.
pub const MAX_FIBONACCI_INPUT: i64 = 92;

/// `fibonacci(n - 1) + fibonacci(n - 2)`. Exponential time.
pub fn fibonacci(n: i64) -> Result<i64, CalcError> {
    const NAME: &str = "fibonacci";
    if n < 0 {
        return Err(CalcError::negative_input(NAME, n));
    }
    if n > MAX_RECURSION_DEPTH {
        return Err(CalcError::depth_exceeded(NAME, n, MAX_RECURSION_DEPTH));
    }
    // Past the bound the recursion would run for ages before overflowing.
    if n > MAX_FIBONACCI_INPUT {
        return Err(CalcError::overflow(NAME, n));
    }
    Ok(fibonacci_rec(n))
}

fn fibonacci_rec(n: i64) -> i64 {
    if n <= 1 {
        return n;
    }
    fibonacci_rec(n - 1) + fibonacci_rec(n - 2)
}

/// Walks the sequence forward from `(1, 0)` for `n - 1` steps.
pub fn fibonacci_iterative(n: i64) -> Result<i64, CalcError> {
    const NAME: &str = "fibonacci_iterative";
    if n < 0 {
        return Err(CalcError::negative_input(NAME, n));
    }
    if n <= 1 {
        return Ok(n);
    }

    let (mut prev1, mut prev2, mut curr) = (1i64, 0i64, 0i64);
    for _ in 1..n {
        curr = prev1.checked_add(prev2).ok_or_else(|| CalcError::overflow(NAME, n))?;
        prev2 = prev1;
        prev1 = curr;
    }
    Ok(curr)
}

/// Identity.
pub fn func(n: i64) -> i64 {
    n
}

/// Calls `func(i)` for every `i` in `0..iterations` and discards the results.
pub fn warm_up(iterations: u64) {
    for i in 0..iterations {
        // Out-of-range counters saturate; the value is thrown away anyway.
        let n = i64::try_from(i).unwrap_or(i64::MAX);
        black_box(func(black_box(n)));
    }
}

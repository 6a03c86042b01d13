//! Factorial, computed recursively and iteratively.
//!
//! Both forms return `n` itself for `n <= 1`, so `factorial(0) == 0`.

use crate::diagnostics::CalcError;
use crate::MAX_RECURSION_DEPTH;

/// Largest `n` whose factorial fits in an `i64`.
pub const MAX_FACTORIAL_INPUT: i64 = 20;

/// `n * factorial(n - 1)`, with recursion depth equal to `n`.
pub fn factorial(n: i64) -> Result<i64, CalcError> {
    const NAME: &str = "factorial";
    if n < 0 {
        return Err(CalcError::negative_input(NAME, n));
    }
    if n > MAX_RECURSION_DEPTH {
        return Err(CalcError::depth_exceeded(NAME, n, MAX_RECURSION_DEPTH));
    }
    if n > MAX_FACTORIAL_INPUT {
        return Err(CalcError::overflow(NAME, n));
    }
    Ok(factorial_rec(n))
}

fn factorial_rec(n: i64) -> i64 {
    if n <= 1 {
        return n;
    }
    n * factorial_rec(n - 1)
}

/// Multiplies `n` by `n-1, n-2, ..., 2` in a loop.
pub fn factorial_iterative(n: i64) -> Result<i64, CalcError> {
    const NAME: &str = "factorial_iterative";
    if n < 0 {
        return Err(CalcError::negative_input(NAME, n));
    }
    if n <= 1 {
        return Ok(n);
    }

    let mut acc = n;
    for i in (2..n).rev() {
        acc = acc.checked_mul(i).ok_or_else(|| CalcError::overflow(NAME, n))?;
    }
    Ok(acc)
}

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::diagnostics::CalcError;
use crate::{factorial, fibonacci};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sequence {
    Factorial,
    Fibonacci,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    Recursive,
    Iterative,
}

impl Sequence {
    pub const ALL: [Sequence; 2] = [Sequence::Factorial, Sequence::Fibonacci];

    /// Evaluate term `n` with the chosen method.
    pub fn evaluate(self, method: Method, n: i64) -> Result<i64, CalcError> {
        match (self, method) {
            (Sequence::Factorial, Method::Recursive) => factorial::factorial(n),
            (Sequence::Factorial, Method::Iterative) => factorial::factorial_iterative(n),
            (Sequence::Fibonacci, Method::Recursive) => fibonacci::fibonacci(n),
            (Sequence::Fibonacci, Method::Iterative) => fibonacci::fibonacci_iterative(n),
        }
    }

    /// Largest `n` whose term fits in an `i64`.
    pub fn max_input(self) -> i64 {
        match self {
            Sequence::Factorial => factorial::MAX_FACTORIAL_INPUT,
            Sequence::Fibonacci => fibonacci::MAX_FIBONACCI_INPUT,
        }
    }
}

impl Method {
    pub const ALL: [Method; 2] = [Method::Recursive, Method::Iterative];
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sequence::Factorial => write!(f, "factorial"),
            Sequence::Fibonacci => write!(f, "fibonacci"),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Recursive => write!(f, "recursive"),
            Method::Iterative => write!(f, "iterative"),
        }
    }
}

/// Check that both methods produce the same term for every `n` in `range`.
///
/// Stops at the first disagreement, or at the first error raised by either
/// method.
pub fn verify_agreement(sequence: Sequence, range: RangeInclusive<i64>) -> Result<(), CalcError> {
    for n in range {
        let recursive = sequence.evaluate(Method::Recursive, n)?;
        let iterative = sequence.evaluate(Method::Iterative, n)?;
        if recursive != iterative {
            return Err(CalcError::disagreement(sequence, n, recursive, iterative));
        }
    }
    Ok(())
}

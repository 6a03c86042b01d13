//! Factorial and Fibonacci, each computed recursively and iteratively, for
//! comparing the two styles.
//!
//! The sequence functions take and return `i64`. Negative inputs are
//! rejected, results that do not fit are reported as overflow, and the
//! recursive forms refuse inputs deeper than [`MAX_RECURSION_DEPTH`].

pub mod diagnostics;
pub mod factorial;
pub mod fibonacci;
pub mod sequence;
pub mod scenario;
pub mod manifest;

pub use diagnostics::CalcError;
pub use factorial::{factorial, factorial_iterative};
pub use fibonacci::{fibonacci, fibonacci_iterative, func, warm_up, WARM_UP_ITERATIONS};
pub use manifest::Manifest;
pub use scenario::{Scenario, ScenarioReport};
pub use sequence::{verify_agreement, Method, Sequence};

/// Deepest recursion the recursive forms will attempt.
pub const MAX_RECURSION_DEPTH: i64 = 1_000;

//! One script's top-level run: an optional warm-up, then a single evaluation.

use std::time::Instant;

use serde::Serialize;

use crate::diagnostics::CalcError;
use crate::fibonacci::warm_up;
use crate::manifest::Manifest;
use crate::sequence::{Method, Sequence};

/// Recursive Fibonacci above this input is slow enough to be worth a warning.
const SLOW_RECURSIVE_FIBONACCI: i64 = 35;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub name: String,
    pub sequence: Sequence,
    pub method: Method,
    pub n: i64,
    pub warm_up: bool,
}

impl Scenario {
    /// `factorial_iterative(15)`.
    pub fn factorial_script() -> Self {
        Self {
            name: "factorial".to_string(),
            sequence: Sequence::Factorial,
            method: Method::Iterative,
            n: 15,
            warm_up: false,
        }
    }

    /// The `func` warm-up loop, then `fibonacci(20)`.
    pub fn fibonacci_script() -> Self {
        Self {
            name: "fibonacci".to_string(),
            sequence: Sequence::Fibonacci,
            method: Method::Recursive,
            n: 20,
            warm_up: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioReport {
    pub name: String,
    pub sequence: Sequence,
    pub method: Method,
    pub n: i64,
    pub value: i64,
    /// Zero when the scenario skipped the warm-up.
    pub warm_up_iterations: u64,
    /// Time spent in the evaluation alone, warm-up excluded.
    pub elapsed_nanos: u64,
}

impl ScenarioReport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[tracing::instrument(skip_all, fields(scenario = %scenario.name))]
pub fn run(scenario: &Scenario, warm_up_iterations: u64) -> Result<ScenarioReport, CalcError> {
    if scenario.sequence == Sequence::Fibonacci
        && scenario.method == Method::Recursive
        && scenario.n > SLOW_RECURSIVE_FIBONACCI
    {
        tracing::warn!(n = scenario.n, "recursive fibonacci is exponential in n");
    }

    let warm_up_iterations = if scenario.warm_up { warm_up_iterations } else { 0 };
    if warm_up_iterations > 0 {
        tracing::debug!(iterations = warm_up_iterations, "warming up");
        warm_up(warm_up_iterations);
    }

    let start = Instant::now();
    let value = scenario.sequence.evaluate(scenario.method, scenario.n)?;
    let elapsed_nanos = u64::try_from(start.elapsed().as_nanos()).unwrap_or(u64::MAX);

    tracing::debug!(
        sequence = %scenario.sequence,
        method = %scenario.method,
        n = scenario.n,
        value,
        elapsed_nanos,
        "evaluated"
    );

    Ok(ScenarioReport {
        name: scenario.name.clone(),
        sequence: scenario.sequence,
        method: scenario.method,
        n: scenario.n,
        value,
        warm_up_iterations,
        elapsed_nanos,
    })
}

/// Run every scenario in manifest order, stopping at the first failure.
pub fn run_all(manifest: &Manifest) -> Result<Vec<ScenarioReport>, CalcError> {
    manifest
        .scenarios
        .iter()
        .map(|s| run(s, manifest.warm_up_iterations))
        .collect()
}

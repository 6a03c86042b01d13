//! The factorial script: `factorial_iterative(15)`.
//!
//! Run with: cargo run --example factorial

use recurse::scenario::{self, Scenario};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // The script runs no warm-up; factorial(15) gives the same answer recursively.
    let report = scenario::run(&Scenario::factorial_script(), 0)?;
    println!("factorial_iterative({}) = {}", report.n, report.value);
    Ok(())
}

//! The fibonacci script: 2^20 calls to the identity `func`, then
//! `fibonacci(20)`.
//!
//! Run with: cargo run --example fibonacci

use recurse::scenario::{self, Scenario};
use recurse::WARM_UP_ITERATIONS;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let report = scenario::run(&Scenario::fibonacci_script(), WARM_UP_ITERATIONS)?;
    println!("{}", report.to_json()?);
    Ok(())
}

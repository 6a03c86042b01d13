//! Runs every scenario in the nearest `recurse.toml`, or the two original
//! scripts when there is none, and prints one JSON report per scenario.
//!
//! Run with: cargo run --example scenarios

use recurse::manifest::{find_manifest, Manifest};
use recurse::scenario;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cwd = std::env::current_dir()?;
    let manifest = match find_manifest(&cwd) {
        Some(path) => Manifest::load(&path)?,
        None => Manifest::default(),
    };

    for report in scenario::run_all(&manifest)? {
        println!("{}", report.to_json()?);
    }
    Ok(())
}

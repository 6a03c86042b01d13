use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::diagnostics::CalcError;
use crate::fibonacci::WARM_UP_ITERATIONS;
use crate::scenario::Scenario;
use crate::sequence::{Method, Sequence};

pub const MANIFEST_FILE: &str = "recurse.toml";

/// The scenarios to run and the warm-up shared by the ones that ask for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub warm_up_iterations: u64,
    pub scenarios: Vec<Scenario>,
}

impl Default for Manifest {
    /// The two original scripts.
    fn default() -> Self {
        Self {
            warm_up_iterations: WARM_UP_ITERATIONS,
            scenarios: vec![Scenario::factorial_script(), Scenario::fibonacci_script()],
        }
    }
}

// ---- TOML deserialization types ----

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlManifest {
    warm_up: Option<TomlWarmUp>,
    #[serde(default)]
    scenario: Vec<TomlScenario>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlWarmUp {
    #[serde(default = "default_iterations")]
    iterations: u64,
}

fn default_iterations() -> u64 {
    WARM_UP_ITERATIONS
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlScenario {
    name: Option<String>,
    sequence: Sequence,
    method: Method,
    n: i64,
    #[serde(default)]
    warm_up: bool,
}

// ---- Parsing & validation ----

impl Manifest {
    /// Read and validate a manifest file.
    pub fn load(path: &Path) -> Result<Self, CalcError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CalcError::manifest(
                format!("{MANIFEST_FILE}: could not read file: {e}"),
                path.to_path_buf(),
            )
        })?;
        let manifest = Self::from_toml_str(&content, path)?;
        tracing::debug!(
            path = %path.display(),
            scenarios = manifest.scenarios.len(),
            "loaded manifest"
        );
        Ok(manifest)
    }

    /// Parse manifest text. `path` is only used to label errors.
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, CalcError> {
        let raw: TomlManifest = toml::from_str(content).map_err(|e| {
            CalcError::manifest(
                format!("{MANIFEST_FILE}: invalid syntax: {e}"),
                path.to_path_buf(),
            )
        })?;

        let warm_up_iterations = raw
            .warm_up
            .map(|w| w.iterations)
            .unwrap_or(WARM_UP_ITERATIONS);

        let mut seen = HashSet::new();
        let mut scenarios = Vec::with_capacity(raw.scenario.len());
        for (idx, entry) in raw.scenario.into_iter().enumerate() {
            let scenario = validate_scenario(idx, entry, path)?;
            if !seen.insert(scenario.name.clone()) {
                return Err(CalcError::manifest(
                    format!("{MANIFEST_FILE}: duplicate scenario name '{}'", scenario.name),
                    path.to_path_buf(),
                ));
            }
            scenarios.push(scenario);
        }

        Ok(Self { warm_up_iterations, scenarios })
    }
}

fn validate_scenario(idx: usize, entry: TomlScenario, path: &Path) -> Result<Scenario, CalcError> {
    let name = entry.name.ok_or_else(|| {
        CalcError::manifest(
            format!("{MANIFEST_FILE}: missing 'name' in scenario #{}", idx + 1),
            path.to_path_buf(),
        )
    })?;

    if name.trim().is_empty() {
        return Err(CalcError::manifest(
            format!("{MANIFEST_FILE}: scenario #{} has an empty name", idx + 1),
            path.to_path_buf(),
        ));
    }

    if entry.n < 0 {
        return Err(CalcError::manifest(
            format!("{MANIFEST_FILE}: scenario '{name}': n must be non-negative, got {}", entry.n),
            path.to_path_buf(),
        ));
    }

    Ok(Scenario {
        name,
        sequence: entry.sequence,
        method: entry.method,
        n: entry.n,
        warm_up: entry.warm_up,
    })
}

// ---- Manifest discovery ----

/// Walk from `start_dir` up to a `.git` boundary or the filesystem root,
/// looking for `recurse.toml`.
pub fn find_manifest(start_dir: &Path) -> Option<PathBuf> {
    let mut dir = start_dir.to_path_buf();
    loop {
        let candidate = dir.join(MANIFEST_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            return None;
        }
        if !dir.pop() {
            return None;
        }
    }
}

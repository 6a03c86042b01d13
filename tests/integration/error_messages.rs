//! Snapshot tests for error message formatting.

use std::path::Path;

use insta::assert_snapshot;
use recurse::{factorial, fibonacci, fibonacci_iterative, verify_agreement, CalcError, Manifest, Sequence};

fn manifest_error(src: &str) -> String {
    Manifest::from_toml_str(src, Path::new("recurse.toml"))
        .unwrap_err()
        .to_string()
}

/// Keep only the last non-empty line, dropping the TOML source excerpt.
fn last_line(msg: &str) -> String {
    msg.lines()
        .rev()
        .find(|line| !line.trim().is_empty())
        .unwrap_or_default()
        .trim()
        .to_string()
}

#[test]
fn negative_input_message() {
    assert_snapshot!(factorial(-4).unwrap_err().to_string(), @"factorial: expected a non-negative input, got -4");
}

#[test]
fn overflow_message() {
    assert_snapshot!(fibonacci_iterative(100).unwrap_err().to_string(), @"fibonacci_iterative(100) overflows a 64-bit integer");
}

#[test]
fn depth_message() {
    assert_snapshot!(fibonacci(5000).unwrap_err().to_string(), @"fibonacci(5000) would recurse deeper than 1000 frames");
}

#[test]
fn disagreement_message() {
    let err = CalcError::disagreement(Sequence::Fibonacci, 7, 13, 21);
    assert_snapshot!(err.to_string(), @"fibonacci(7) disagrees: recursive = 13, iterative = 21");
}

#[test]
fn agreement_error_is_the_underlying_error() {
    let err = verify_agreement(Sequence::Factorial, 20..=22).unwrap_err();
    assert_snapshot!(err.to_string(), @"factorial(21) overflows a 64-bit integer");
}

#[test]
fn duplicate_scenario_message() {
    let src = r#"
        [[scenario]]
        name = "twice"
        sequence = "factorial"
        method = "iterative"
        n = 3

        [[scenario]]
        name = "twice"
        sequence = "fibonacci"
        method = "iterative"
        n = 3
    "#;
    assert_snapshot!(manifest_error(src), @"Manifest error: recurse.toml: duplicate scenario name 'twice'");
}

#[test]
fn negative_n_in_manifest_message() {
    let src = "[[scenario]]\nname = \"neg\"\nsequence = \"factorial\"\nmethod = \"recursive\"\nn = -2\n";
    assert_snapshot!(manifest_error(src), @"Manifest error: recurse.toml: scenario 'neg': n must be non-negative, got -2");
}

#[test]
fn empty_name_message() {
    let src = "[[scenario]]\nname = \"  \"\nsequence = \"factorial\"\nmethod = \"recursive\"\nn = 2\n";
    assert_snapshot!(manifest_error(src), @"Manifest error: recurse.toml: scenario #1 has an empty name");
}

#[test]
fn misspelled_scenario_key_message() {
    let src = "[[scenario]]\nname = \"typo\"\nsequence = \"factorial\"\nmetod = \"iterative\"\nn = 3\n";
    let msg = manifest_error(src);
    assert!(msg.starts_with("Manifest error: recurse.toml: invalid syntax: "), "{msg}");
    assert_snapshot!(last_line(&msg), @"unknown field `metod`, expected one of `name`, `sequence`, `method`, `n`, `warm_up`");
}

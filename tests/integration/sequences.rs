use recurse::{
    factorial, factorial_iterative, fibonacci, fibonacci_iterative, func, CalcError,
    MAX_RECURSION_DEPTH,
};

// ── Documented values ─────────────────────────────────────────────────────────

#[test]
fn factorial_known_values() {
    assert_eq!(factorial(0), Ok(0));
    assert_eq!(factorial(1), Ok(1));
    assert_eq!(factorial(5), Ok(120));
}

#[test]
fn fibonacci_known_values() {
    assert_eq!(fibonacci(0), Ok(0));
    assert_eq!(fibonacci(1), Ok(1));
    assert_eq!(fibonacci(10), Ok(55));
}

#[test]
fn factorial_script_result() {
    assert_eq!(factorial_iterative(15), Ok(1_307_674_368_000));
}

#[test]
fn fibonacci_script_result() {
    assert_eq!(fibonacci(20), Ok(6765));
}

// ── Recursive and iterative forms agree ───────────────────────────────────────

#[test]
fn factorial_forms_agree_up_to_20() {
    for n in 0..=20 {
        assert_eq!(factorial(n), factorial_iterative(n), "n = {n}");
    }
}

#[test]
fn fibonacci_forms_agree_up_to_30() {
    for n in 0..=30 {
        assert_eq!(fibonacci(n), fibonacci_iterative(n), "n = {n}");
    }
}

#[test]
fn func_returns_its_argument() {
    for n in [i64::MIN, -7, 0, 7, 1 << 20, i64::MAX] {
        assert_eq!(func(n), n);
    }
}

// ── Failure modes ─────────────────────────────────────────────────────────────

#[test]
fn negative_inputs_are_rejected_by_every_form() {
    assert!(matches!(factorial(-1), Err(CalcError::NegativeInput { n: -1, .. })));
    assert!(matches!(factorial_iterative(-1), Err(CalcError::NegativeInput { n: -1, .. })));
    assert!(matches!(fibonacci(-1), Err(CalcError::NegativeInput { n: -1, .. })));
    assert!(matches!(fibonacci_iterative(-1), Err(CalcError::NegativeInput { n: -1, .. })));
}

#[test]
fn overflow_is_reported_not_wrapped() {
    assert!(matches!(factorial(21), Err(CalcError::Overflow { n: 21, .. })));
    assert!(matches!(factorial_iterative(21), Err(CalcError::Overflow { n: 21, .. })));
    assert!(matches!(fibonacci_iterative(93), Err(CalcError::Overflow { n: 93, .. })));
}

#[test]
fn recursive_fibonacci_past_bound_overflows_without_recursing() {
    // Evaluating these for real would take longer than the age of the test run.
    assert!(matches!(fibonacci(93), Err(CalcError::Overflow { n: 93, .. })));
    assert!(matches!(fibonacci(500), Err(CalcError::Overflow { n: 500, .. })));
}

#[test]
fn deep_recursion_is_refused_up_front() {
    let n = MAX_RECURSION_DEPTH + 1;
    assert!(matches!(factorial(n), Err(CalcError::DepthExceeded { .. })));
    // Would take forever if it actually recursed.
    assert!(matches!(fibonacci(n), Err(CalcError::DepthExceeded { .. })));
}

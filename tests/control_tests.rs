#![cfg(feature = "control")]
//! Either, Try and Validation observed through their public operations.

use functour::control::{Either, Failure, TimeoutError, Try, Validation};
use proptest::prelude::*;
use rstest::rstest;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
#[error("illegal thread state")]
struct IllegalThreadState;

// =============================================================================
// Either
// =============================================================================

#[rstest]
#[case(Either::Left("oops"), "Left(oops)")]
#[case(Either::Right(2.3), "Right(2.3)")]
fn either_display_names_the_side(#[case] value: Either<&str, f64>, #[case] expected: &str) {
    assert_eq!(value.to_string(), expected);
}

#[rstest]
fn either_fold_collapses_both_sides() {
    let describe = |value: Either<&str, i32>| value.fold(|e| format!("error {e}"), |v| format!("value {v}"));
    assert_eq!(describe(Either::Left("x")), "error x");
    assert_eq!(describe(Either::Right(1)), "value 1");
}

proptest! {
    #[test]
    fn prop_either_swap_is_involutive(value in prop_oneof![
        any::<i32>().prop_map(Either::<i32, bool>::Left),
        any::<bool>().prop_map(Either::<i32, bool>::Right),
    ]) {
        prop_assert_eq!(value.clone().swap().swap(), value);
    }

    #[test]
    fn prop_either_round_trips_through_result(value in any::<Result<u8, String>>()) {
        let either: Either<String, u8> = value.clone().into();
        prop_assert_eq!(Result::<u8, String>::from(either), value);
    }
}

// =============================================================================
// Try
// =============================================================================

#[rstest]
fn try_of_fallible_keeps_the_error() {
    let attempt: Try<()> = Try::of_fallible(|| Err(IllegalThreadState));
    let failure = attempt.into_result().unwrap_err();
    assert!(failure.downcast_ref::<IllegalThreadState>().is_some());
    assert_eq!(failure.to_string(), "illegal thread state");
}

#[rstest]
fn try_recover_replaces_a_failure() {
    let recovered = Try::of(|| -> i32 { panic!("boom") }).recover(|_| -1);
    assert_eq!(recovered.ok(), Some(-1));
}

#[rstest]
fn try_map_captures_a_panic_in_the_mapper() {
    let mapped = Try::success(0).map(|d: i32| 10 / d);
    assert!(mapped.is_failure());
}

#[rstest]
fn try_callbacks_see_only_their_branch() {
    let mut seen = Vec::new();
    let _ = Try::success(1)
        .on_success(|v| seen.push(format!("success {v}")))
        .on_failure(|f| seen.push(format!("failure {f}")));
    assert_eq!(seen, vec!["success 1"]);
}

#[rstest]
fn timeout_failure_renders_its_duration() {
    let failure = Failure::from(TimeoutError { duration: Duration::from_millis(20) });
    assert!(failure.is_timeout());
    assert_eq!(failure.to_string(), "operation timed out after 20ms");
}

proptest! {
    #[test]
    fn prop_try_get_or_else_matches_option(value in proptest::option::of(any::<i32>()), default in any::<i32>()) {
        let attempt = Try::of(|| value.expect("absent"));
        prop_assert_eq!(attempt.get_or_else(default), value.unwrap_or(default));
    }
}

// =============================================================================
// Validation
// =============================================================================

fn non_negative(n: i32) -> Validation<String, i32> {
    if n < 0 {
        Validation::invalid(format!("{n} is negative"))
    } else {
        Validation::valid(n)
    }
}

proptest! {
    #[test]
    fn prop_combine_reports_every_error_in_order(
        a in any::<i32>(),
        b in any::<i32>(),
        c in any::<i32>(),
    ) {
        let combined = Validation::combine(non_negative(a), non_negative(b))
            .combine(non_negative(c))
            .ap(|x, y, z| (x, y, z));
        let expected: Vec<String> = [a, b, c]
            .into_iter()
            .filter(|n| *n < 0)
            .map(|n| format!("{n} is negative"))
            .collect();

        if expected.is_empty() {
            prop_assert_eq!(combined, Validation::Valid((a, b, c)));
        } else {
            prop_assert_eq!(combined, Validation::Invalid(expected));
        }
    }

    #[test]
    fn prop_sequence_keeps_values_when_all_pass(values in prop::collection::vec(0_i32..1000, 0..32)) {
        let sequenced = Validation::sequence(values.iter().copied().map(non_negative));
        prop_assert_eq!(sequenced, Validation::Valid(values));
    }
}

#[rstest]
fn four_way_combine_collects_all_errors() {
    let result = Validation::combine(non_negative(-1), non_negative(2))
        .combine(non_negative(-3))
        .combine(non_negative(-4))
        .ap(|a, b, c, d| a + b + c + d);
    assert_eq!(
        result.to_either(),
        Either::Left(vec![
            "-1 is negative".to_string(),
            "-3 is negative".to_string(),
            "-4 is negative".to_string(),
        ])
    );
}

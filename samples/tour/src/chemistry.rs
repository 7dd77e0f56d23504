//! A task whose result is either an error state or a success state.

use std::fmt;
use std::ops::RangeInclusive;

use functour::control::Either;

/// The task failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorState {
    /// What went wrong.
    pub message: String,
}

/// The task succeeded with a measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuccessState {
    /// The measured value.
    pub value: f64,
}

impl fmt::Display for ErrorState {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "ErrorState({})", self.message)
    }
}

impl fmt::Display for SuccessState {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "SuccessState({})", self.value)
    }
}

/// Inputs the property checks draw from. Narrow enough that the failing
/// input `1` is generated in practically every run.
pub const TASK_INPUTS: RangeInclusive<i32> = -100..=100;

/// Fails for `1` and succeeds with `2.3` for every other input.
pub fn perform_task(input: i32) -> Either<ErrorState, SuccessState> {
    if input == 1 {
        Either::Left(ErrorState {
            message: "oops".to_string(),
        })
    } else {
        Either::Right(SuccessState { value: 2.3 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use proptest::strategy::ValueTree;
    use proptest::test_runner::TestRunner;
    use rstest::rstest;

    #[rstest]
    fn one_is_the_failing_input() {
        assert_eq!(perform_task(1).to_string(), "Left(ErrorState(oops))");
        assert_eq!(perform_task(2).to_string(), "Right(SuccessState(2.3))");
    }

    #[rstest]
    fn task_inputs_reach_the_failing_input() {
        let mut runner = TestRunner::deterministic();
        let mut failing_inputs = 0;
        for _ in 0..1000 {
            let input = TASK_INPUTS.new_tree(&mut runner).unwrap().current();
            if perform_task(input).is_left() {
                failing_inputs += 1;
            }
        }
        assert!(failing_inputs > 0);
    }

    proptest! {
        #[test]
        fn left_exactly_when_input_is_one(input in TASK_INPUTS) {
            prop_assert_eq!(perform_task(input).is_left(), input == 1);
        }
    }
}

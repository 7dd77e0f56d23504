//! Lifting partial functions into total ones.
//!
//! A function that panics for some inputs (integer division by zero, an
//! out-of-range index) is partial. Lifting wraps it so that every input
//! produces a value: `None` or a [`Try::Failure`] in place of the panic.

use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::control::Try;

/// Lifts a unary function so that a panic becomes `None`.
///
/// ```
/// use functour::compose::lift_option;
///
/// let first = lift_option(|values: Vec<i32>| values[0]);
/// assert_eq!(first(vec![7]), Some(7));
/// assert_eq!(first(Vec::new()), None);
/// ```
pub fn lift_option<A, B, F>(function: F) -> impl Fn(A) -> Option<B>
where
    F: Fn(A) -> B,
{
    move |argument| catch_unwind(AssertUnwindSafe(|| function(argument))).ok()
}

/// Lifts a binary function so that a panic becomes `None`.
pub fn lift_option2<A, B, C, F>(function: F) -> impl Fn(A, B) -> Option<C>
where
    F: Fn(A, B) -> C,
{
    move |first, second| catch_unwind(AssertUnwindSafe(|| function(first, second))).ok()
}

/// Lifts a unary function so that a panic becomes [`Try::Failure`].
///
/// ```
/// use functour::compose::lift_try;
///
/// let reciprocal = lift_try(|d: i32| 100 / d);
/// assert!(reciprocal(4).is_success());
/// assert!(reciprocal(0).is_failure());
/// ```
pub fn lift_try<A, B, F>(function: F) -> impl Fn(A) -> Try<B>
where
    F: Fn(A) -> B,
{
    move |argument| Try::of(|| function(argument))
}

/// Lifts a binary function so that a panic becomes [`Try::Failure`].
pub fn lift_try2<A, B, C, F>(function: F) -> impl Fn(A, B) -> Try<C>
where
    F: Fn(A, B) -> C,
{
    move |first, second| Try::of(|| function(first, second))
}

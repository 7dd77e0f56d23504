//! Validation type for accumulating independent errors.
//!
//! Unlike `Result` or [`Either`], combining several `Validation`s does not stop
//! at the first failure: every field is validated and all error messages are
//! reported together, in argument order.
//!
//! # Examples
//!
//! ```rust
//! use functour::control::Validation;
//!
//! fn validate_age(age: i32) -> Validation<String, i32> {
//!     if age < 0 {
//!         Validation::invalid("Age must be at least 0".to_string())
//!     } else {
//!         Validation::valid(age)
//!     }
//! }
//!
//! fn validate_name(name: &str) -> Validation<String, String> {
//!     if name.is_empty() {
//!         Validation::invalid("Name must not be empty".to_string())
//!     } else {
//!         Validation::valid(name.to_string())
//!     }
//! }
//!
//! let invalid = Validation::combine(validate_name(""), validate_age(-1)).ap(|n, a| (n, a));
//! assert_eq!(
//!     invalid.into_result(),
//!     Err(vec![
//!         "Name must not be empty".to_string(),
//!         "Age must be at least 0".to_string(),
//!     ])
//! );
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::either::Either;
use crate::typeclass::{Functor, TypeConstructor};

/// A validated value of type `T`, or the error `E` explaining why not.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Validation<E, T> {
    /// The value passed validation.
    Valid(T),
    /// The value failed validation.
    Invalid(E),
}

impl<E, T> Validation<E, T> {
    /// Creates a valid result.
    #[inline]
    pub const fn valid(value: T) -> Self {
        Self::Valid(value)
    }

    /// Creates an invalid result.
    #[inline]
    pub const fn invalid(error: E) -> Self {
        Self::Invalid(error)
    }

    /// Returns `true` if this is a valid result.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns `true` if this is an invalid result.
    #[inline]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// Transforms the valid value.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Validation<E, U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Valid(value) => Validation::Valid(function(value)),
            Self::Invalid(error) => Validation::Invalid(error),
        }
    }

    /// Transforms the error.
    #[inline]
    pub fn map_error<G, F>(self, function: F) -> Validation<G, T>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Valid(value) => Validation::Valid(value),
            Self::Invalid(error) => Validation::Invalid(function(error)),
        }
    }

    /// Converts into a standard `Result`.
    ///
    /// # Errors
    ///
    /// Returns the validation error if this is invalid.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(error) => Err(error),
        }
    }

    /// Converts into an [`Either`] with the error on the left.
    #[inline]
    pub fn to_either(self) -> Either<E, T> {
        self.into_result().into()
    }

    /// Starts an accumulating combination of independent validations.
    ///
    /// Extend it with [`Combined2::combine`] and finish with `ap`.
    #[inline]
    pub const fn combine<B>(first: Self, second: Validation<E, B>) -> Combined2<E, T, B> {
        Combined2 { first, second }
    }

    fn collect_into(self, errors: &mut Vec<E>) -> Option<T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(error) => {
                errors.push(error);
                None
            }
        }
    }
}

impl<E, T> Validation<Vec<E>, Vec<T>> {
    /// Validates every element, collecting all values or all errors.
    ///
    /// ```rust
    /// use functour::control::Validation;
    ///
    /// let ages = [3, -1, 7, -5].map(|age| {
    ///     if age < 0 { Validation::invalid(age) } else { Validation::valid(age) }
    /// });
    /// assert_eq!(Validation::sequence(ages), Validation::Invalid(vec![-1, -5]));
    /// ```
    pub fn sequence<I>(validations: I) -> Self
    where
        I: IntoIterator<Item = Validation<E, T>>,
    {
        let mut errors = Vec::new();
        let values: Vec<T> = validations
            .into_iter()
            .filter_map(|validation| validation.collect_into(&mut errors))
            .collect();
        if errors.is_empty() {
            Self::Valid(values)
        } else {
            Self::Invalid(errors)
        }
    }
}

/// Two independent validations awaiting a combining function.
#[derive(Debug, Clone)]
#[must_use = "a combination does nothing until `ap` is called"]
pub struct Combined2<E, A, B> {
    first: Validation<E, A>,
    second: Validation<E, B>,
}

impl<E, A, B> Combined2<E, A, B> {
    /// Adds a third validation.
    pub fn combine<C>(self, third: Validation<E, C>) -> Combined3<E, A, B, C> {
        Combined3 {
            first: self.first,
            second: self.second,
            third,
        }
    }

    /// Applies `function` if every validation passed, otherwise returns all
    /// errors in argument order.
    pub fn ap<R, F>(self, function: F) -> Validation<Vec<E>, R>
    where
        F: FnOnce(A, B) -> R,
    {
        let mut errors = Vec::new();
        let first = self.first.collect_into(&mut errors);
        let second = self.second.collect_into(&mut errors);
        match (first, second) {
            (Some(a), Some(b)) => Validation::Valid(function(a, b)),
            _ => Validation::Invalid(errors),
        }
    }
}

/// Three independent validations awaiting a combining function.
#[derive(Debug, Clone)]
#[must_use = "a combination does nothing until `ap` is called"]
pub struct Combined3<E, A, B, C> {
    first: Validation<E, A>,
    second: Validation<E, B>,
    third: Validation<E, C>,
}

impl<E, A, B, C> Combined3<E, A, B, C> {
    /// Adds a fourth validation.
    pub fn combine<D>(self, fourth: Validation<E, D>) -> Combined4<E, A, B, C, D> {
        Combined4 {
            first: self.first,
            second: self.second,
            third: self.third,
            fourth,
        }
    }

    /// See [`Combined2::ap`].
    pub fn ap<R, F>(self, function: F) -> Validation<Vec<E>, R>
    where
        F: FnOnce(A, B, C) -> R,
    {
        let mut errors = Vec::new();
        let first = self.first.collect_into(&mut errors);
        let second = self.second.collect_into(&mut errors);
        let third = self.third.collect_into(&mut errors);
        match (first, second, third) {
            (Some(a), Some(b), Some(c)) => Validation::Valid(function(a, b, c)),
            _ => Validation::Invalid(errors),
        }
    }
}

/// Four independent validations awaiting a combining function.
#[derive(Debug, Clone)]
#[must_use = "a combination does nothing until `ap` is called"]
pub struct Combined4<E, A, B, C, D> {
    first: Validation<E, A>,
    second: Validation<E, B>,
    third: Validation<E, C>,
    fourth: Validation<E, D>,
}

impl<E, A, B, C, D> Combined4<E, A, B, C, D> {
    /// See [`Combined2::ap`].
    pub fn ap<R, F>(self, function: F) -> Validation<Vec<E>, R>
    where
        F: FnOnce(A, B, C, D) -> R,
    {
        let mut errors = Vec::new();
        let first = self.first.collect_into(&mut errors);
        let second = self.second.collect_into(&mut errors);
        let third = self.third.collect_into(&mut errors);
        let fourth = self.fourth.collect_into(&mut errors);
        match (first, second, third, fourth) {
            (Some(a), Some(b), Some(c), Some(d)) => Validation::Valid(function(a, b, c, d)),
            _ => Validation::Invalid(errors),
        }
    }
}

impl<E: fmt::Debug, T: fmt::Display> fmt::Display for Validation<E, T> {
    /// Valid values use their `Display` form, errors their `Debug` form, so
    /// accumulated error lists render without extra formatting.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid(value) => write!(formatter, "Valid({value})"),
            Self::Invalid(error) => write!(formatter, "Invalid({error:?})"),
        }
    }
}

impl<E, T> TypeConstructor for Validation<E, T> {
    type Inner = T;
    type WithType<B> = Validation<E, B>;
}

impl<E, T> Functor for Validation<E, T> {
    fn fmap<B, F>(self, function: F) -> Validation<E, B>
    where
        F: FnMut(T) -> B,
    {
        self.map(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn non_negative(value: i32) -> Validation<String, i32> {
        if value < 0 {
            Validation::invalid(format!("{value} is negative"))
        } else {
            Validation::valid(value)
        }
    }

    #[rstest]
    fn all_valid_combines_values() {
        let sum = Validation::combine(non_negative(1), non_negative(2))
            .combine(non_negative(3))
            .ap(|a, b, c| a + b + c);
        assert_eq!(sum, Validation::Valid(6));
    }

    #[rstest]
    fn errors_keep_argument_order() {
        let result = Validation::combine(non_negative(-1), non_negative(2))
            .combine(non_negative(-3))
            .combine(non_negative(-4))
            .ap(|a, b, c, d| a + b + c + d);
        assert_eq!(
            result,
            Validation::Invalid(vec![
                "-1 is negative".to_string(),
                "-3 is negative".to_string(),
                "-4 is negative".to_string(),
            ])
        );
    }

    #[rstest]
    fn combining_function_is_not_called_on_failure() {
        let mut calls = 0;
        let result = Validation::combine(non_negative(-1), non_negative(1)).ap(|a, b| {
            calls += 1;
            a + b
        });
        assert!(result.is_invalid());
        assert_eq!(calls, 0);
    }

    #[rstest]
    fn sequence_collects_all_values() {
        let result = Validation::sequence((0..4).map(non_negative));
        assert_eq!(result, Validation::Valid(vec![0, 1, 2, 3]));
    }

    #[rstest]
    fn display_renders_accumulated_errors() {
        let result: Validation<Vec<&str>, i32> = Validation::invalid(vec!["a", "b"]);
        assert_eq!(result.to_string(), r#"Invalid(["a", "b"])"#);
        assert_eq!(Validation::<Vec<&str>, i32>::valid(3).to_string(), "Valid(3)");
    }
}

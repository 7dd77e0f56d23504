//! Try type - the outcome of a computation that may fail.
//!
//! [`Try`] captures errors at the boundary where a computation runs: a
//! returned `Err` or a panic becomes a [`Failure`] value and never propagates
//! past the constructor. The computation runs exactly once, eagerly.
//!
//! # Examples
//!
//! ```rust
//! use functour::control::Try;
//!
//! let mut reported = Vec::new();
//! let attempt: Try<i32> = Try::of(|| panic!("thread illegal state"))
//!     .on_failure(|error| reported.push(format!("try failure: {error}")));
//!
//! assert!(attempt.is_failure());
//! assert_eq!(reported, vec!["try failure: thread illegal state"]);
//! ```

use std::error::Error;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};

use super::either::Either;
use super::failure::Failure;
use crate::typeclass::{Functor, Monad, TypeConstructor};

/// Either a computed value or the failure that prevented it.
#[derive(Debug, Clone)]
pub enum Try<T> {
    /// The computation returned normally.
    Success(T),
    /// The computation raised an error, panicked or timed out.
    Failure(Failure),
}

impl<T> Try<T> {
    /// Runs `supplier` now and captures a panic as [`Failure::Panicked`].
    pub fn of<F>(supplier: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match catch_unwind(AssertUnwindSafe(supplier)) {
            Ok(value) => Self::Success(value),
            Err(payload) => Self::Failure(Failure::from_panic(&*payload)),
        }
    }

    /// Runs a fallible `supplier` now; `Err` becomes [`Failure::Raised`] and a
    /// panic becomes [`Failure::Panicked`].
    ///
    /// ```rust
    /// use functour::control::Try;
    ///
    /// let parsed = Try::of_fallible(|| "42".parse::<i32>());
    /// assert_eq!(parsed.ok(), Some(42));
    ///
    /// let broken = Try::of_fallible(|| "forty-two".parse::<i32>());
    /// assert!(broken.is_failure());
    /// ```
    pub fn of_fallible<F, E>(supplier: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
        E: Error + Send + Sync + 'static,
    {
        match catch_unwind(AssertUnwindSafe(supplier)) {
            Ok(Ok(value)) => Self::Success(value),
            Ok(Err(error)) => Self::Failure(Failure::raised(error)),
            Err(payload) => Self::Failure(Failure::from_panic(&*payload)),
        }
    }

    /// Wraps an already computed value.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wraps an already captured failure.
    #[inline]
    pub const fn failure(failure: Failure) -> Self {
        Self::Failure(failure)
    }

    /// Returns `true` if the computation succeeded.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the computation failed.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Calls `handler` with the captured failure, if any, and returns `self`
    /// unchanged.
    #[must_use]
    pub fn on_failure<H>(self, handler: H) -> Self
    where
        H: FnOnce(&Failure),
    {
        if let Self::Failure(failure) = &self {
            handler(failure);
        }
        self
    }

    /// Calls `handler` with the value, if any, and returns `self` unchanged.
    #[must_use]
    pub fn on_success<H>(self, handler: H) -> Self
    where
        H: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            handler(value);
        }
        self
    }

    /// Transforms the value. A panic inside `function` is captured as a
    /// failure, like in [`Try::of`].
    pub fn map<U, F>(self, function: F) -> Try<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Try::of(move || function(value)),
            Self::Failure(failure) => Try::Failure(failure),
        }
    }

    /// Chains a computation that itself produces a `Try`.
    pub fn flat_map<U, F>(self, function: F) -> Try<U>
    where
        F: FnOnce(T) -> Try<U>,
    {
        match self {
            Self::Success(value) => match catch_unwind(AssertUnwindSafe(move || function(value))) {
                Ok(next) => next,
                Err(payload) => Try::Failure(Failure::from_panic(&*payload)),
            },
            Self::Failure(failure) => Try::Failure(failure),
        }
    }

    /// Replaces a failure with a value computed from it.
    #[must_use]
    pub fn recover<F>(self, function: F) -> Self
    where
        F: FnOnce(Failure) -> T,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(failure) => Self::Success(function(failure)),
        }
    }

    /// Returns the value or `default` on failure.
    #[inline]
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the value if the computation succeeded.
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrows the failure if the computation failed.
    #[inline]
    pub const fn failure_ref(&self) -> Option<&Failure> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure),
        }
    }

    /// Converts into a standard `Result`.
    ///
    /// # Errors
    ///
    /// Returns the captured [`Failure`] if the computation failed.
    #[inline]
    pub fn into_result(self) -> Result<T, Failure> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(failure) => Err(failure),
        }
    }

    /// Converts into an [`Either`] with the failure on the left.
    #[inline]
    pub fn to_either(self) -> Either<Failure, T> {
        self.into_result().into()
    }
}

impl<T> From<Result<T, Failure>> for Try<T> {
    fn from(result: Result<T, Failure>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(failure) => Self::Failure(failure),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Try<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(formatter, "Success({value})"),
            Self::Failure(failure) => write!(formatter, "Failure({failure})"),
        }
    }
}

impl<T> TypeConstructor for Try<T> {
    type Inner = T;
    type WithType<B> = Try<B>;
}

impl<T> Functor for Try<T> {
    fn fmap<B, F>(self, function: F) -> Try<B>
    where
        F: FnMut(T) -> B,
    {
        self.map(function)
    }
}

impl<T> Monad for Try<T> {
    fn pure(value: T) -> Self {
        Self::Success(value)
    }

    fn flat_map<B, F>(self, function: F) -> Try<B>
    where
        F: FnMut(T) -> Try<B>,
    {
        Self::flat_map(self, function)
    }
}

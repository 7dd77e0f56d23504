//! Monad type class - sequencing dependent computations.
//!
//! # Laws
//!
//! - **Left Identity**: `pure(a).flat_map(f) == f(a)`
//! - **Right Identity**: `m.flat_map(pure) == m`
//! - **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`

use super::functor::Functor;

/// A functor whose mapping function may itself produce a container, which is
/// then flattened.
///
/// Short-circuiting is part of the contract: once a step yields an absent or
/// failed container, later steps are skipped.
///
/// # Examples
///
/// ```rust
/// use functour::typeclass::{Functor, Monad};
///
/// // A present value mapped to an absent intermediate yields overall absence.
/// let maybe_foo_bar = Some("foo".to_string())
///     .flat_map(|_| None::<String>)
///     .fmap(|s| s.to_uppercase() + "bar");
/// assert_eq!(maybe_foo_bar, None);
/// ```
pub trait Monad: Functor {
    /// Wraps a plain value in the container.
    fn pure(value: Self::Inner) -> Self;

    /// Applies `function` and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> Self::WithType<B>;
}

impl<A> Monad for Option<A> {
    #[inline]
    fn pure(value: A) -> Self {
        Some(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnMut(A) -> Option<B>,
    {
        self.and_then(function)
    }
}

impl<T, E> Monad for Result<T, E> {
    #[inline]
    fn pure(value: T) -> Self {
        Ok(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnMut(T) -> Result<B, E>,
    {
        self.and_then(function)
    }
}

use std::any::type_name;
use std::fmt;

use super::patterns::Pattern;

/// Returned by [`Match::get`] when no arm matched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no case matched a value of type {type_name}")]
pub struct MatchError {
    /// Type of the subject that fell through every arm.
    pub type_name: &'static str,
}

/// An ordered list of arms over one subject.
///
/// Arms are tried top to bottom and the first whose pattern matches runs its
/// handler; later arms are skipped. Finish with [`Match::otherwise`] for a
/// wildcard arm, or with [`Match::get`] to get an error instead.
#[must_use = "a match does nothing until it is finished with `otherwise`, `get` or `option`"]
pub struct Match<'s, S: ?Sized, R> {
    subject: &'s S,
    result: Option<R>,
}

impl<'s, S: ?Sized, R> Match<'s, S, R> {
    /// Starts a match on `subject`.
    #[inline]
    pub const fn of(subject: &'s S) -> Self {
        Self {
            subject,
            result: None,
        }
    }

    /// Adds an arm. `handler` receives what `pattern` extracted.
    pub fn case<P, F>(mut self, pattern: P, handler: F) -> Self
    where
        P: Pattern<S>,
        F: FnOnce(P::Output) -> R,
    {
        if self.result.is_none()
            && let Some(extracted) = pattern.unapply(self.subject)
        {
            self.result = Some(handler(extracted));
        }
        self
    }

    /// Finishes with a wildcard arm that receives the subject.
    pub fn otherwise<F>(self, handler: F) -> R
    where
        F: FnOnce(&S) -> R,
    {
        match self.result {
            Some(result) => result,
            None => handler(self.subject),
        }
    }

    /// Finishes without a wildcard.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError`] if no arm matched.
    pub fn get(self) -> Result<R, MatchError> {
        self.result.ok_or(MatchError {
            type_name: type_name::<S>(),
        })
    }

    /// Finishes without a wildcard, mapping "no arm matched" to `None`.
    pub fn option(self) -> Option<R> {
        self.result
    }
}

impl<S: ?Sized, R> fmt::Debug for Match<'_, S, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Match")
            .field("subject", &type_name::<S>())
            .field("matched", &self.result.is_some())
            .finish()
    }
}

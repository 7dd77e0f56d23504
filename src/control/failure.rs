//! Failure values captured at a computation boundary.

use std::any::Any;
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

/// Error type representing a missed deadline.
///
/// # Examples
///
/// ```rust
/// use functour::control::TimeoutError;
/// use std::time::Duration;
///
/// let error = TimeoutError { duration: Duration::from_secs(2) };
/// assert_eq!(error.to_string(), "operation timed out after 2s");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("operation timed out after {duration:?}")]
pub struct TimeoutError {
    /// The deadline that was exceeded.
    pub duration: Duration,
}

/// The error held by a failed [`Try`](super::Try).
///
/// Each variant is a distinct failure idiom: a panic captured from the
/// computation, an `Err` it returned, or a deadline it missed.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Failure {
    /// The computation panicked.
    #[error("{message}")]
    Panicked {
        /// The panic payload rendered as text.
        message: String,
    },
    /// The computation returned an error.
    #[error("{0}")]
    Raised(Arc<dyn Error + Send + Sync>),
    /// The computation did not finish before its deadline.
    #[error(transparent)]
    Timeout(#[from] TimeoutError),
}

impl Failure {
    /// Wraps a returned error.
    pub fn raised<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::Raised(Arc::new(error))
    }

    /// Builds a failure from a panic payload.
    pub fn from_panic(payload: &(dyn Any + Send)) -> Self {
        Self::Panicked {
            message: panic_message(payload),
        }
    }

    /// Returns `true` for [`Failure::Timeout`].
    #[inline]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }

    /// Returns `true` for [`Failure::Panicked`].
    #[inline]
    pub const fn is_panic(&self) -> bool {
        matches!(self, Self::Panicked { .. })
    }

    /// Attempts to view a raised error as a concrete type.
    pub fn downcast_ref<E: Error + 'static>(&self) -> Option<&E> {
        match self {
            Self::Raised(error) => error.downcast_ref::<E>(),
            _ => None,
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "panic with a non-string payload".to_string()
    }
}

//! Lazy evaluation with memoization.
//!
//! [`Lazy`] defers a computation until the value is first read and caches the
//! result. Every later read returns the cached value, so a `Lazy` is
//! indistinguishable from a pre-computed constant once it has been forced.
//! Unlike a plain supplier closure it is referentially transparent.
//!
//! The value can be shared between threads: concurrent first reads block on
//! each other and the producer still runs exactly once.
//!
//! # Examples
//!
//! ```rust
//! use functour::control::Lazy;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! let evaluations = AtomicUsize::new(0);
//! let lazy = Lazy::new(|| {
//!     evaluations.fetch_add(1, Ordering::SeqCst);
//!     0.42
//! });
//!
//! assert!(!lazy.is_evaluated());
//! assert_eq!(*lazy.get(), 0.42);
//! assert_eq!(*lazy.get(), 0.42);
//! assert_eq!(evaluations.load(Ordering::SeqCst), 1);
//! ```

use std::fmt;
use std::sync::OnceLock;

use parking_lot::Mutex;

/// A lazily evaluated, memoized value.
///
/// # Type Parameters
///
/// * `T` - The type of the computed value
/// * `F` - The type of the producer (defaults to `fn() -> T`)
///
/// # Poisoning
///
/// If the producer panics the value is poisoned: the producer is gone and no
/// value was stored, so every later read panics as well.
pub struct Lazy<T, F = fn() -> T> {
    value: OnceLock<T>,
    producer: Mutex<Option<F>>,
}

impl<T, F: FnOnce() -> T> Lazy<T, F> {
    /// Stores `producer` without invoking it.
    #[inline]
    pub fn new(producer: F) -> Self {
        Self {
            value: OnceLock::new(),
            producer: Mutex::new(Some(producer)),
        }
    }

    /// Evaluates the value on first call and returns the cached result.
    ///
    /// # Panics
    ///
    /// Panics if the producer panics now or panicked on an earlier read.
    pub fn force(&self) -> &T {
        self.value.get_or_init(|| {
            let producer = self.producer.lock().take();
            match producer {
                Some(producer) => producer(),
                None => panic!("Lazy instance has been poisoned"),
            }
        })
    }

    /// Alias of [`Lazy::force`].
    ///
    /// # Panics
    ///
    /// Panics if the value is poisoned.
    #[inline]
    pub fn get(&self) -> &T {
        self.force()
    }

    /// Consumes the lazy value, evaluating it if needed.
    ///
    /// # Panics
    ///
    /// Panics if the value is poisoned.
    pub fn into_inner(self) -> T {
        match self.value.into_inner() {
            Some(value) => value,
            None => match self.producer.into_inner() {
                Some(producer) => producer(),
                None => panic!("Lazy instance has been poisoned"),
            },
        }
    }

    /// Builds a new lazy value that applies `function` to this one when
    /// forced. Neither value is evaluated by this call.
    ///
    /// ```rust
    /// use functour::control::Lazy;
    ///
    /// let length = Lazy::new(|| "hello".to_string()).map(|s| s.len());
    /// assert!(!length.is_evaluated());
    /// assert_eq!(*length.force(), 5);
    /// ```
    pub fn map<U, G>(self, function: G) -> Lazy<U, impl FnOnce() -> U>
    where
        G: FnOnce(T) -> U,
    {
        Lazy::new(move || function(self.into_inner()))
    }
}

impl<T> Lazy<T, fn() -> T> {
    /// Creates an already evaluated lazy value.
    #[inline]
    pub fn value(value: T) -> Self {
        Self {
            value: OnceLock::from(value),
            producer: Mutex::new(None),
        }
    }
}

impl<T, F> Lazy<T, F> {
    /// Returns the cached value without triggering evaluation.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.value.get()
    }

    /// Consumes the lazy value, returning the cached result if there is one.
    /// An unevaluated producer is dropped without running.
    #[inline]
    pub fn into_evaluated(self) -> Option<T> {
        self.value.into_inner()
    }

    /// Returns whether the producer has already run to completion.
    #[inline]
    pub fn is_evaluated(&self) -> bool {
        self.value.get().is_some()
    }

    /// Returns whether the producer was consumed without storing a value.
    ///
    /// This is the case after a panicking evaluation, and also while another
    /// thread is still running the producer.
    pub fn is_poisoned(&self) -> bool {
        self.value.get().is_none() && self.producer.lock().is_none()
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Lazy<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value.get() {
            Some(value) => formatter.debug_tuple("Lazy").field(value).finish(),
            None => formatter.write_str("Lazy(<unevaluated>)"),
        }
    }
}

impl<T: fmt::Display, F> fmt::Display for Lazy<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value.get() {
            Some(value) => write!(formatter, "Lazy({value})"),
            None => formatter.write_str("Lazy(?)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::panic::{AssertUnwindSafe, catch_unwind};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    #[rstest]
    fn producer_is_not_called_on_construction() {
        let calls = AtomicUsize::new(0);
        let lazy = Lazy::new(|| calls.fetch_add(1, Ordering::SeqCst));
        assert!(!lazy.is_evaluated());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        drop(lazy);
    }

    #[rstest]
    fn display_shows_placeholder_until_forced() {
        let lazy = Lazy::new(|| 7);
        assert_eq!(lazy.to_string(), "Lazy(?)");
        lazy.force();
        assert_eq!(lazy.to_string(), "Lazy(7)");
    }

    #[rstest]
    fn value_is_already_evaluated() {
        let lazy = Lazy::value("ready");
        assert!(lazy.is_evaluated());
        assert_eq!(lazy.peek(), Some(&"ready"));
    }

    #[rstest]
    fn concurrent_readers_share_a_single_evaluation() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let lazy = Arc::new(Lazy::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            thread::sleep(std::time::Duration::from_millis(10));
            99
        }));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let lazy = Arc::clone(&lazy);
                thread::spawn(move || *lazy.force())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 99);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    fn panicking_producer_poisons_the_value() {
        let lazy: Lazy<i32, _> = Lazy::new(|| panic!("producer failed"));

        let first = catch_unwind(AssertUnwindSafe(|| *lazy.force()));
        assert!(first.is_err());
        assert!(lazy.is_poisoned());

        let second = catch_unwind(AssertUnwindSafe(|| *lazy.force()));
        assert!(second.is_err());
    }
}

//! Per-argument memoization.
//!
//! [`Memoized`] wraps a function and remembers the result for every argument
//! it has seen. The cache sits behind a `parking_lot` mutex, so a memoized
//! function can be shared between threads. The lock is not held while the
//! wrapped function runs; two threads racing on a fresh argument may both
//! compute it, and the first stored result wins.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use parking_lot::Mutex;

/// A function with a result cache keyed by argument.
pub struct Memoized<A, B, F> {
    function: F,
    cache: Mutex<HashMap<A, B>>,
}

/// Wraps `function` in a [`Memoized`] cache.
///
/// A nullary function is memoized over `()`:
///
/// ```
/// use functour::compose::memoize;
/// use std::sync::atomic::{AtomicU32, Ordering};
///
/// let draws = AtomicU32::new(0);
/// let random = memoize(|()| draws.fetch_add(1, Ordering::SeqCst) + 17);
///
/// assert_eq!(random.apply(()), random.apply(()));
/// assert_eq!(draws.load(Ordering::SeqCst), 1);
/// ```
pub fn memoize<A, B, F>(function: F) -> Memoized<A, B, F>
where
    A: Eq + Hash + Clone,
    B: Clone,
    F: Fn(A) -> B,
{
    Memoized {
        function,
        cache: Mutex::new(HashMap::new()),
    }
}

impl<A, B, F> Memoized<A, B, F>
where
    A: Eq + Hash + Clone,
    B: Clone,
    F: Fn(A) -> B,
{
    /// Returns the cached result for `argument`, computing it on first use.
    pub fn apply(&self, argument: A) -> B {
        if let Some(cached) = self.cache.lock().get(&argument) {
            return cached.clone();
        }
        let computed = (self.function)(argument.clone());
        self.cache
            .lock()
            .entry(argument)
            .or_insert(computed)
            .clone()
    }

    /// Returns `true` if `argument` already has a cached result.
    pub fn is_cached(&self, argument: &A) -> bool {
        self.cache.lock().contains_key(argument)
    }

    /// Number of cached arguments.
    pub fn cached_len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Drops every cached result.
    pub fn clear(&self) {
        self.cache.lock().clear();
    }
}

impl<A, B, F> fmt::Debug for Memoized<A, B, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoized")
            .field("cached", &self.cache.lock().len())
            .finish_non_exhaustive()
    }
}

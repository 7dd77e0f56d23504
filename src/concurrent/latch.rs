use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

/// Returned by [`Latch::wait_timeout`] when the count did not reach zero in
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("latch still waiting on {remaining} signal(s) after {waited:?}")]
pub struct LatchTimeoutError {
    /// Signals still outstanding when the wait gave up.
    pub remaining: usize,
    /// How long the caller waited.
    pub waited: Duration,
}

struct Inner {
    count: Mutex<usize>,
    released: Condvar,
}

/// A count-down latch.
///
/// Waiters block until [`Latch::count_down`] has been called `count` times.
/// Once open the latch stays open. Clones share the same counter, so a clone
/// can be moved into a completion listener while the original waits.
#[derive(Clone)]
pub struct Latch {
    inner: Arc<Inner>,
}

impl Latch {
    /// Creates a latch that opens after `count` signals. A zero count is
    /// open from the start.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            inner: Arc::new(Inner {
                count: Mutex::new(count),
                released: Condvar::new(),
            }),
        }
    }

    /// Records one signal. Extra signals on an open latch are ignored.
    pub fn count_down(&self) {
        let mut count = self.inner.count.lock();
        if *count == 0 {
            return;
        }
        *count -= 1;
        if *count == 0 {
            self.inner.released.notify_all();
        }
    }

    /// Signals still outstanding.
    pub fn count(&self) -> usize {
        *self.inner.count.lock()
    }

    /// Blocks until the latch is open.
    pub fn wait(&self) {
        let mut count = self.inner.count.lock();
        while *count > 0 {
            self.inner.released.wait(&mut count);
        }
    }

    /// Blocks until the latch is open or `timeout` elapses.
    ///
    /// # Errors
    ///
    /// Returns [`LatchTimeoutError`] if signals are still outstanding when
    /// the timeout elapses.
    pub fn wait_timeout(&self, timeout: Duration) -> Result<(), LatchTimeoutError> {
        let started = Instant::now();
        let deadline = started + timeout;
        let mut count = self.inner.count.lock();
        while *count > 0 {
            if self
                .inner
                .released
                .wait_until(&mut count, deadline)
                .timed_out()
                && *count > 0
            {
                return Err(LatchTimeoutError {
                    remaining: *count,
                    waited: started.elapsed(),
                });
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for Latch {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Latch")
            .field("count", &self.count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::thread;

    #[rstest]
    fn zero_count_is_open() {
        Latch::new(0).wait();
    }

    #[rstest]
    fn opens_after_every_signal() {
        let latch = Latch::new(2);
        let signals: Vec<_> = (0..2)
            .map(|_| {
                let latch = latch.clone();
                thread::spawn(move || latch.count_down())
            })
            .collect();

        latch.wait();
        assert_eq!(latch.count(), 0);
        for signal in signals {
            signal.join().unwrap();
        }
    }

    #[rstest]
    fn extra_signals_are_ignored() {
        let latch = Latch::new(1);
        latch.count_down();
        latch.count_down();
        assert_eq!(latch.count(), 0);
    }

    #[rstest]
    fn wait_timeout_reports_outstanding_signals() {
        let latch = Latch::new(3);
        latch.count_down();

        let error = latch
            .wait_timeout(Duration::from_millis(20))
            .unwrap_err();

        assert_eq!(error.remaining, 2);
        assert!(error.waited >= Duration::from_millis(20));
        assert!(error.to_string().starts_with("latch still waiting on 2 signal(s)"));
    }
}

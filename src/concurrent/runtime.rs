//! The runtime tasks are spawned on.
//!
//! A shared multi-thread runtime is built lazily, with one worker per CPU,
//! and lives for the rest of the process. Code that is already running inside
//! a tokio runtime keeps using that runtime instead.

use std::sync::LazyLock;

use tokio::runtime::{Builder, Handle, Runtime};

static SHARED_RUNTIME: LazyLock<Runtime> = LazyLock::new(|| {
    let workers = num_cpus::get();
    tracing::debug!(workers, "starting shared task runtime");
    Builder::new_multi_thread()
        .worker_threads(workers)
        .thread_name("functour-worker")
        .enable_all()
        .build()
        .expect("failed to build the shared task runtime")
});

/// Returns the process-wide runtime, building it on first call.
#[inline]
#[must_use]
pub fn shared() -> &'static Runtime {
    &SHARED_RUNTIME
}

/// Returns the current runtime's handle when called from inside one, and the
/// shared runtime's handle otherwise.
#[must_use]
pub fn handle() -> Handle {
    Handle::try_current().unwrap_or_else(|_| shared().handle().clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tokio::runtime::RuntimeFlavor;

    #[rstest]
    fn shared_runtime_is_a_singleton() {
        assert!(std::ptr::eq(shared(), shared()));
    }

    #[rstest]
    fn outside_a_runtime_the_shared_handle_is_used() {
        let value = handle().block_on(async { 6 * 7 });
        assert_eq!(value, 42);
    }

    #[rstest]
    #[tokio::test]
    async fn inside_a_runtime_its_own_handle_is_used() {
        // `#[tokio::test]` runs on a current-thread runtime; the shared one is
        // multi-threaded.
        assert_eq!(handle().runtime_flavor(), RuntimeFlavor::CurrentThread);
    }
}

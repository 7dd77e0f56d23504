//! Deferred computation with completion listeners.

use std::fmt;
use std::future::Future;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::FutureExt;
use parking_lot::{Condvar, Mutex};

use super::config::TaskConfig;
use super::runtime;
use crate::control::{Failure, TimeoutError, Try};

type Listener<T> = Box<dyn FnOnce(&Try<T>) + Send>;

enum State<T> {
    Pending(Vec<Listener<T>>),
    Completed(Arc<Try<T>>),
}

struct Shared<T> {
    state: Mutex<State<T>>,
    completed: Condvar,
    label: String,
}

/// A handle to work running on a tokio runtime.
///
/// The task starts pending and completes exactly once with a [`Try`]: the
/// value the work produced, the panic it raised, or a timeout. Listeners
/// registered with [`Task::on_complete`] are called exactly once, after the
/// work has finished; registering on a completed task calls the listener
/// immediately on the registering thread.
///
/// Handles are cheap to clone and all clones observe the same outcome.
///
/// # Examples
///
/// ```rust
/// use functour::concurrent::{Task, TaskConfig};
/// use std::time::Duration;
///
/// let slow = Task::submit_with(
///     TaskConfig::default().timeout(Duration::from_millis(20)),
///     || {
///         std::thread::sleep(Duration::from_millis(500));
///         "finished"
///     },
/// );
///
/// let outcome = slow.wait();
/// assert!(outcome.failure_ref().is_some_and(|failure| failure.is_timeout()));
/// ```
pub struct Task<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Clone for Task<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T: Send + Sync + 'static> Task<T> {
    /// Runs a blocking closure on the runtime's blocking pool.
    pub fn submit<F>(work: F) -> Self
    where
        F: FnOnce() -> T + Send + 'static,
    {
        Self::submit_with(TaskConfig::default(), work)
    }

    /// Runs a blocking closure with the given options.
    pub fn submit_with<F>(config: TaskConfig, work: F) -> Self
    where
        F: FnOnce() -> T + Send + 'static,
    {
        let body = async move {
            match tokio::task::spawn_blocking(move || Try::of(work)).await {
                Ok(outcome) => outcome,
                Err(join_error) => Try::failure(Failure::Panicked {
                    message: join_error.to_string(),
                }),
            }
        };
        Self::spawn(&config, body)
    }

    /// Drives a future on the runtime.
    pub fn submit_async<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = T> + Send + 'static,
    {
        Self::submit_async_with(TaskConfig::default(), future)
    }

    /// Drives a future with the given options. A panic while polling completes
    /// the task with [`Failure::Panicked`].
    pub fn submit_async_with<Fut>(config: TaskConfig, future: Fut) -> Self
    where
        Fut: Future<Output = T> + Send + 'static,
    {
        let body = async move {
            match AssertUnwindSafe(future).catch_unwind().await {
                Ok(value) => Try::success(value),
                Err(payload) => Try::failure(Failure::from_panic(&*payload)),
            }
        };
        Self::spawn(&config, body)
    }

    fn spawn<Fut>(config: &TaskConfig, body: Fut) -> Self
    where
        Fut: Future<Output = Try<T>> + Send + 'static,
    {
        let task = Self::pending(config.label());
        let handle = runtime::handle();
        tracing::debug!(task = %config.label(), deadline = ?config.deadline(), "task submitted");

        let timer = config.deadline().map(|duration| {
            let task = task.clone();
            handle.spawn(async move {
                tokio::time::sleep(duration).await;
                if task.complete(Try::failure(Failure::Timeout(TimeoutError { duration }))) {
                    tracing::warn!(task = %task.shared.label, ?duration, "task timed out");
                }
            })
        });

        let worker = task.clone();
        handle.spawn(async move {
            let outcome = body.await;
            if let Some(timer) = timer {
                timer.abort();
            }
            if !worker.complete(outcome) {
                tracing::debug!(task = %worker.shared.label, "discarding result that arrived after the deadline");
            }
        });

        task
    }
}

impl<T> Task<T> {
    fn pending(label: &str) -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(State::Pending(Vec::new())),
                completed: Condvar::new(),
                label: label.to_owned(),
            }),
        }
    }

    /// Creates a task that has already completed with `outcome`.
    pub fn completed(outcome: Try<T>) -> Self {
        let task = Self::pending("completed");
        task.complete(outcome);
        task
    }

    /// Moves the task to its final state. Returns `false` if it had already
    /// completed, in which case `outcome` is dropped.
    fn complete(&self, outcome: Try<T>) -> bool {
        let outcome = Arc::new(outcome);
        let listeners = {
            let mut state = self.shared.state.lock();
            match &mut *state {
                State::Completed(_) => return false,
                State::Pending(listeners) => {
                    let listeners = std::mem::take(listeners);
                    *state = State::Completed(Arc::clone(&outcome));
                    listeners
                }
            }
        };
        self.shared.completed.notify_all();
        for listener in listeners {
            Self::notify(listener, &outcome);
        }
        true
    }

    fn notify(listener: Listener<T>, outcome: &Try<T>) {
        if catch_unwind(AssertUnwindSafe(|| listener(outcome))).is_err() {
            tracing::warn!("task completion listener panicked");
        }
    }

    /// Registers `listener` to receive the outcome exactly once.
    pub fn on_complete<L>(&self, listener: L) -> &Self
    where
        L: FnOnce(&Try<T>) + Send + 'static,
    {
        let completed = {
            let mut state = self.shared.state.lock();
            match &mut *state {
                State::Pending(listeners) => {
                    listeners.push(Box::new(listener));
                    return self;
                }
                State::Completed(outcome) => Arc::clone(outcome),
            }
        };
        Self::notify(Box::new(listener), &completed);
        self
    }

    /// Registers a listener that only sees successful values.
    pub fn on_success<L>(&self, listener: L) -> &Self
    where
        L: FnOnce(&T) + Send + 'static,
    {
        self.on_complete(move |outcome| {
            if let Try::Success(value) = outcome {
                listener(value);
            }
        })
    }

    /// Registers a listener that only sees failures.
    pub fn on_failure<L>(&self, listener: L) -> &Self
    where
        L: FnOnce(&Failure) + Send + 'static,
    {
        self.on_complete(move |outcome| {
            if let Try::Failure(failure) = outcome {
                listener(failure);
            }
        })
    }

    /// Returns `true` once the task has an outcome.
    pub fn is_completed(&self) -> bool {
        matches!(*self.shared.state.lock(), State::Completed(_))
    }

    fn outcome(&self) -> Option<Arc<Try<T>>> {
        match &*self.shared.state.lock() {
            State::Completed(outcome) => Some(Arc::clone(outcome)),
            State::Pending(_) => None,
        }
    }
}

impl<T: Clone> Task<T> {
    /// The outcome if the task has completed, without blocking.
    pub fn value(&self) -> Option<Try<T>> {
        self.outcome().map(|outcome| (*outcome).clone())
    }

    /// Blocks the calling thread until the task completes.
    ///
    /// Must not be called from a thread that drives the task's runtime, such
    /// as inside `#[tokio::test]`; use [`Task::join`] there.
    pub fn wait(&self) -> Try<T> {
        let mut state = self.shared.state.lock();
        loop {
            if let State::Completed(outcome) = &*state {
                return (**outcome).clone();
            }
            self.shared.completed.wait(&mut state);
        }
    }

    /// Blocks until the task completes or `timeout` elapses.
    ///
    /// # Errors
    ///
    /// Returns [`TimeoutError`] if the task is still pending after `timeout`.
    pub fn wait_timeout(&self, timeout: Duration) -> Result<Try<T>, TimeoutError> {
        let deadline = Instant::now() + timeout;
        let mut state = self.shared.state.lock();
        loop {
            if let State::Completed(outcome) = &*state {
                return Ok((**outcome).clone());
            }
            if self
                .shared
                .completed
                .wait_until(&mut state, deadline)
                .timed_out()
            {
                return match &*state {
                    State::Completed(outcome) => Ok((**outcome).clone()),
                    State::Pending(_) => Err(TimeoutError { duration: timeout }),
                };
            }
        }
    }
}

impl<T: Clone + Send + 'static> Task<T> {
    /// Waits for the outcome without blocking the executor.
    pub async fn join(&self) -> Try<T> {
        let (sender, receiver) = futures::channel::oneshot::channel();
        self.on_complete(move |outcome| {
            // The receiver only goes away if `join` itself was dropped.
            let _ = sender.send(outcome.clone());
        });
        match receiver.await {
            Ok(outcome) => outcome,
            Err(_) => Try::failure(Failure::Panicked {
                message: "task dropped its completion listener".to_owned(),
            }),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Task<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.shared.state.lock() {
            State::Pending(_) => formatter.write_str("Task(?)"),
            State::Completed(outcome) => write!(formatter, "Task({outcome})"),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Task<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = formatter.debug_struct("Task");
        debug.field("label", &self.shared.label);
        match &*self.shared.state.lock() {
            State::Pending(listeners) => debug
                .field("state", &"pending")
                .field("listeners", &listeners.len()),
            State::Completed(outcome) => debug.field("outcome", outcome),
        };
        debug.finish()
    }
}

static_assertions::assert_impl_all!(Task<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Task<String>: Send, Sync);

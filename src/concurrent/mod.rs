//! Deferred computations and wait-for-signal synchronisation.
//!
//! - [`Task`]: work scheduled on a tokio runtime whose outcome is reported as
//!   a [`Try`](crate::control::Try) to completion listeners
//! - [`TaskConfig`]: per-task options such as a deadline
//! - [`Latch`]: a count-down latch for callers that choose to block
//!
//! Tasks submitted from inside a tokio runtime run on that runtime; otherwise
//! they run on a shared multi-thread runtime created on first use.
//!
//! # Examples
//!
//! ```rust
//! use functour::concurrent::{Latch, Task};
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicI32, Ordering};
//!
//! let observed = Arc::new(AtomicI32::new(0));
//! let latch = Latch::new(1);
//!
//! let task = Task::submit(|| 42);
//! {
//!     let observed = Arc::clone(&observed);
//!     let latch = latch.clone();
//!     task.on_complete(move |outcome| {
//!         let value = match outcome {
//!             functour::control::Try::Success(value) => *value,
//!             functour::control::Try::Failure(_) => -42,
//!         };
//!         observed.store(value, Ordering::SeqCst);
//!         latch.count_down();
//!     });
//! }
//!
//! latch.wait();
//! assert_eq!(observed.load(Ordering::SeqCst), 42);
//! ```

mod config;
mod latch;
pub mod runtime;
mod task;

pub use config::TaskConfig;
pub use latch::{Latch, LatchTimeoutError};
pub use task::Task;

//! Control structures for functional programming.
//!
//! - [`Either`]: A value that is one of two shapes
//! - [`Try`]: The outcome of a computation, with failures captured as values
//! - [`Lazy`]: Thread-safe lazy evaluation with memoization
//! - [`Validation`]: Error-accumulating validation
//!
//! # Examples
//!
//! ## Capturing a failure
//!
//! ```rust
//! use functour::control::Try;
//!
//! let attempt = Try::of_fallible(|| "not a number".parse::<u32>());
//! assert!(attempt.is_failure());
//! ```
//!
//! ## Lazy Evaluation
//!
//! ```rust
//! use functour::control::Lazy;
//!
//! let lazy = Lazy::new(|| 6 * 7);
//! assert!(!lazy.is_evaluated());
//! assert_eq!(*lazy.get(), 42);
//! ```

mod attempt;
mod either;
mod failure;
mod lazy;
mod validation;

pub use attempt::Try;
pub use either::Either;
pub use failure::{Failure, TimeoutError};
pub use lazy::Lazy;
pub use validation::{Combined2, Combined3, Combined4, Validation};

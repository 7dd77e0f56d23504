//! Structural pattern matching over values the crate defines.
//!
//! Rust's `match` already destructures enums and tuples. What it cannot do is
//! treat a projection as a pattern, or build arms at run time. This module
//! adds both:
//!
//! - [`Pattern`]: something that may extract an output from a subject
//! - [`patterns`]: the built-in patterns, one per container in the crate
//! - [`Unapply`]: a record-level projection into a tuple of parts
//! - [`Match`]: ordered arms where the first matching one wins
//!
//! # Examples
//!
//! ```rust
//! use functour::control::Either;
//! use functour::matching::Match;
//! use functour::matching::patterns::{any, left, right};
//!
//! let outcome: Either<&str, f64> = Either::Right(2.3);
//! let message = Match::of(&outcome)
//!     .case(left(any()), |error| format!("failed: {error}"))
//!     .case(right(any()), |value| format!("succeeded with {value}"))
//!     .otherwise(|_| "unreachable".to_string());
//!
//! assert_eq!(message, "succeeded with 2.3");
//! ```

mod matcher;
pub mod patterns;
mod unapply;

pub use matcher::{Match, MatchError};
pub use patterns::Pattern;
pub use unapply::Unapply;

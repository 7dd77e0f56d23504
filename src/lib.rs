//! # functour
//!
//! Functional data-modeling primitives for Rust.
//!
//! ## Overview
//!
//! The crate collects the small building blocks that functional code leans
//! on and that the standard library leaves out:
//!
//! - **Type Classes**: minimal `Functor` and `Monad` traits
//! - **Control Structures**: `Either`, `Try`, `Lazy`, `Validation`
//! - **Persistent Data Structures**: `List`, `Queue`, `SortedSet`, `Stream`
//! - **Function Composition**: `compose!`, `pipe!`, `curry2!`, `partial!`,
//!   memoization and lifting
//! - **Concurrency**: `Task` with completion listeners and deadlines, `Latch`
//! - **Pattern Matching**: composable `Pattern`s and first-match-wins `Match`
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad)
//! - `control`: Either, Try, Lazy, Validation
//! - `persistent`: Persistent data structures
//! - `compose`: Function composition utilities
//! - `concurrent`: Task and Latch on a shared tokio runtime
//! - `matching`: Structural pattern matching
//! - `serde`: Serialization for `Either` and `Validation`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use functour::prelude::*;
//!
//! let name: Validation<String, String> = Validation::valid("John Doe".to_string());
//! let age: Validation<String, i32> = Validation::invalid("Age must be at least 0".to_string());
//!
//! let person = Validation::combine(name, age).ap(|name, age| (name, age));
//! assert_eq!(person.into_result(), Err(vec!["Age must be at least 0".to_string()]));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use functour::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "concurrent")]
    pub use crate::concurrent::*;

    #[cfg(feature = "matching")]
    pub use crate::matching::{Match, MatchError, Pattern, Unapply};
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "persistent")]
pub mod persistent;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "concurrent")]
pub mod concurrent;

#[cfg(feature = "matching")]
pub mod matching;

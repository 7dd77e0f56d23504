//! Type class traits for functional programming abstractions.
//!
//! - [`TypeConstructor`]: Higher-kinded type emulation via GATs
//! - [`Functor`]: Mapping over container values
//! - [`Monad`]: Sequencing computations with dependency
//!
//! Instances exist for `Option`, `Result` and, when their features are
//! enabled, for `Try`, `Either`, `Validation` and `List`.
//!
//! # Examples
//!
//! ```rust
//! use functour::typeclass::{Functor, Monad};
//!
//! let doubled = Some(21).fmap(|x| x * 2);
//! assert_eq!(doubled, Some(42));
//!
//! let chained = Some(4).flat_map(|x| if x % 2 == 0 { Some(x / 2) } else { None });
//! assert_eq!(chained, Some(2));
//! ```

mod functor;
mod higher;
mod monad;

pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;

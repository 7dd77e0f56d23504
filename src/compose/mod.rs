//! Function composition, currying and lifting.
//!
//! Functions are ordinary closures here; this module adds the glue that a
//! functional style needs on top of them:
//!
//! - [`compose!`]: right-to-left composition, `compose!(f, g)(x) == f(g(x))`
//! - [`pipe!`]: left-to-right application, `pipe!(x, f, g) == g(f(x))`
//! - [`curry2!`], [`curry3!`]: one argument at a time
//! - [`partial!`]: fix some arguments, leave `__` holes for the rest
//! - [`identity`], [`constant`], [`flip`]: the usual combinators
//! - [`memoize`]: cache results per argument
//! - [`lift_option`], [`lift_try`]: turn a panicking function into a total one
//! - [`Tuple2Ext`]: mapping and applying pairs
//!
//! # Examples
//!
//! ```
//! use functour::{compose, curry3, partial};
//! use functour::compose::lift_option2;
//!
//! let sum = |a: i32, b: i32| a + b;
//! let plus_one_then_double = compose!(|x: i32| x * 2, |x: i32| x + 1);
//! assert_eq!(plus_one_then_double(sum(1, 2)), 8);
//!
//! let sum3 = |a: i32, b: i32, c: i32| a + b + c;
//! assert_eq!(curry3!(sum3)(1)(2)(3), 6);
//! assert_eq!(partial!(sum3, 1, __, __)(2, 3), 6);
//!
//! let divide = lift_option2(|a: i32, b: i32| a / b);
//! assert_eq!(divide(4, 2), Some(2));
//! assert_eq!(divide(1, 0), None);
//! ```
//!
//! # Laws
//!
//! - `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - `compose!(identity, f) == f == compose!(f, identity)`
//! - `flip(flip(f)) == f`

mod compose_macro;
mod curry_macro;
mod lift;
mod memoize;
mod partial_macro;
mod pipe_macro;
mod tuple;
mod utils;

pub use lift::{lift_option, lift_option2, lift_try, lift_try2};
pub use memoize::{Memoized, memoize};
pub use tuple::Tuple2Ext;
pub use utils::{__, Placeholder, constant, flip, identity};

pub use crate::compose;
pub use crate::curry2;
pub use crate::curry3;
pub use crate::partial;
pub use crate::pipe;

//! Left-to-right function application.

/// Threads a value through functions left to right.
///
/// `pipe!(x, f, g)` evaluates `g(f(x))` immediately. Each function is called
/// once, so `FnOnce` closures are accepted.
///
/// ```
/// use functour::{compose, pipe};
///
/// let words = vec!["one", "two", "three"];
/// let sentence = pipe!(words, |w: Vec<&str>| w.join(", "), |s: String| s.to_uppercase());
/// assert_eq!(sentence, "ONE, TWO, THREE");
///
/// let f = |x: i32| x + 1;
/// let g = |x: i32| x * 2;
/// assert_eq!(pipe!(5, f, g), compose!(g, f)(5));
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    ($value:expr, $function:expr, $($rest:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($rest),+)
    };
}

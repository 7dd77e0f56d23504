//! Small combinators used alongside the composition macros.

/// Returns its argument. The unit of [`compose!`](crate::compose!).
///
/// ```
/// use functour::compose;
/// use functour::compose::identity;
///
/// let double = |x: i32| x * 2;
/// assert_eq!(compose!(identity, double)(4), double(4));
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// Builds a function that ignores its input and returns `value`.
///
/// ```
/// use functour::compose::constant;
///
/// let zeros: Vec<i32> = vec![3, 1, 2].into_iter().map(constant(0)).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// ```
/// use functour::compose::flip;
///
/// let subtract = |a: i32, b: i32| a - b;
/// assert_eq!(flip(subtract)(1, 10), 9);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}

/// Marker behind the `__` hole of [`partial!`](crate::partial!).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Placeholder;

/// The `__` hole. [`partial!`](crate::partial!) matches the token itself, so
/// importing this constant is never required.
#[allow(non_upper_case_globals)]
pub const __: Placeholder = Placeholder;

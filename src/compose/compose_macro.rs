//! Right-to-left function composition.

/// Composes functions right to left: the last function runs first.
///
/// `compose!(f, g, h)` builds `move |x| f(g(h(x)))`. A single function is
/// returned unchanged. Every function must be `Fn` so that the result can be
/// called repeatedly.
///
/// # Examples
///
/// ```
/// use functour::compose;
///
/// let sum_then_describe = compose!(
///     |total: i32| format!("total = {total}"),
///     |(a, b): (i32, i32)| a + b,
/// );
/// assert_eq!(sum_then_describe((1, 2)), "total = 3");
/// ```
///
/// Composition is associative:
///
/// ```
/// use functour::compose;
///
/// let f = |x: i32| x + 1;
/// let g = |x: i32| x * 2;
/// let h = |x: i32| x - 3;
///
/// assert_eq!(compose!(f, compose!(g, h))(10), compose!(compose!(f, g), h)(10));
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };

    ($outer:expr, $inner:expr $(,)?) => {{
        let outer = $outer;
        let inner = $inner;
        move |input| outer(inner(input))
    }};

    ($outer:expr, $($rest:expr),+ $(,)?) => {{
        let outer = $outer;
        let rest = $crate::compose!($($rest),+);
        move |input| outer(rest(input))
    }};
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    #[rstest]
    fn single_function_is_returned_as_is() {
        let negate = |x: i32| -x;
        assert_eq!(compose!(negate)(4), -4);
    }

    #[rstest]
    #[case(0, 2)]
    #[case(4, 10)]
    fn and_then_style_chain(#[case] input: i32, #[case] expected: i32) {
        // sum.andThen(double): compose applies the right-hand side first.
        let increment = |x: i32| x + 1;
        let double = |x: i32| x * 2;
        assert_eq!(compose!(double, increment)(input), expected);
    }

    #[rstest]
    fn three_functions_run_right_to_left() {
        let trace = compose!(
            |s: String| s + "c",
            |s: String| s + "b",
            |s: String| s + "a",
        );
        assert_eq!(trace(String::new()), "abc");
    }
}

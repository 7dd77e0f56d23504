//! Partial application with `__` holes.

/// Fixes some arguments of a two- or three-argument function.
///
/// Write a value to fix an argument and `__` to leave it open; the result is
/// a closure over the open positions, in order. Fixed values are cloned on
/// every call. Fixing every argument yields a thunk.
///
/// `__` is matched as a literal token, so it does not need to be imported.
///
/// ```
/// use functour::partial;
///
/// let sum3 = |a: i32, b: i32, c: i32| a + b + c;
///
/// let sum2 = partial!(sum3, 1, __, __);
/// assert_eq!(sum2(2, 3), 6);
///
/// let plus_four = partial!(sum3, 1, __, 3);
/// assert_eq!(plus_four(10), 14);
///
/// let halve = partial!(|n: f64, d: f64| n / d, __, 2.0);
/// assert_eq!(halve(9.0), 4.5);
/// ```
#[macro_export]
macro_rules! partial {
    // Three arguments; these arms come first so that a three-argument call is
    // never read as a two-argument one.
    ($function:expr, __, __, __ $(,)?) => {{
        let function = $function;
        move |a, b, c| function(a, b, c)
    }};
    ($function:expr, $a:expr, __, __ $(,)?) => {{
        let (function, a) = ($function, $a);
        move |b, c| function(::std::clone::Clone::clone(&a), b, c)
    }};
    ($function:expr, __, $b:expr, __ $(,)?) => {{
        let (function, b) = ($function, $b);
        move |a, c| function(a, ::std::clone::Clone::clone(&b), c)
    }};
    ($function:expr, __, __, $c:expr $(,)?) => {{
        let (function, c) = ($function, $c);
        move |a, b| function(a, b, ::std::clone::Clone::clone(&c))
    }};
    ($function:expr, $a:expr, $b:expr, __ $(,)?) => {{
        let (function, a, b) = ($function, $a, $b);
        move |c| {
            function(
                ::std::clone::Clone::clone(&a),
                ::std::clone::Clone::clone(&b),
                c,
            )
        }
    }};
    ($function:expr, $a:expr, __, $c:expr $(,)?) => {{
        let (function, a, c) = ($function, $a, $c);
        move |b| {
            function(
                ::std::clone::Clone::clone(&a),
                b,
                ::std::clone::Clone::clone(&c),
            )
        }
    }};
    ($function:expr, __, $b:expr, $c:expr $(,)?) => {{
        let (function, b, c) = ($function, $b, $c);
        move |a| {
            function(
                a,
                ::std::clone::Clone::clone(&b),
                ::std::clone::Clone::clone(&c),
            )
        }
    }};
    ($function:expr, $a:expr, $b:expr, $c:expr $(,)?) => {{
        let (function, a, b, c) = ($function, $a, $b, $c);
        move || {
            function(
                ::std::clone::Clone::clone(&a),
                ::std::clone::Clone::clone(&b),
                ::std::clone::Clone::clone(&c),
            )
        }
    }};

    // Two arguments.
    ($function:expr, __, __ $(,)?) => {{
        let function = $function;
        move |a, b| function(a, b)
    }};
    ($function:expr, $a:expr, __ $(,)?) => {{
        let (function, a) = ($function, $a);
        move |b| function(::std::clone::Clone::clone(&a), b)
    }};
    ($function:expr, __, $b:expr $(,)?) => {{
        let (function, b) = ($function, $b);
        move |a| function(a, ::std::clone::Clone::clone(&b))
    }};
    ($function:expr, $a:expr, $b:expr $(,)?) => {{
        let (function, a, b) = ($function, $a, $b);
        move || function(::std::clone::Clone::clone(&a), ::std::clone::Clone::clone(&b))
    }};
}

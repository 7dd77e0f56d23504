//! Currying for two- and three-argument functions.
//!
//! The curried closures share the original function through an `Rc`, so every
//! stage can be called more than once. Arguments captured by an intermediate
//! stage are cloned on each call and must therefore be `Clone`.

/// Turns `f(a, b)` into `|a| |b| f(a, b)`.
///
/// ```
/// use functour::curry2;
///
/// let sum = curry2!(|a: i32, b: i32| a + b);
/// let add_ten = sum(10);
/// assert_eq!(add_ten(1), 11);
/// assert_eq!(add_ten(2), 12);
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| function(::std::clone::Clone::clone(&first), second)
        }
    }};
}

/// Turns `f(a, b, c)` into `|a| |b| |c| f(a, b, c)`.
///
/// ```
/// use functour::curry3;
///
/// let sum = |a: i32, b: i32, c: i32| a + b + c;
/// let curried = curry3!(sum);
/// let plus_three = curried(1)(2);
/// assert_eq!(plus_three(3), 6);
/// assert_eq!(plus_three(10), 13);
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = ::std::clone::Clone::clone(&first);
                move |third| {
                    function(
                        ::std::clone::Clone::clone(&first),
                        ::std::clone::Clone::clone(&second),
                        third,
                    )
                }
            }
        }
    }};
}

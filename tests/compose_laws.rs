#![cfg(feature = "compose")]
//! Laws for the function composition utilities.
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Identity**: `compose!(f, identity) == f == compose!(identity, f)`
//! - **Pipe**: `pipe!(x, f, g) == compose!(g, f)(x)`
//! - **Currying**: `curry2!(f)(a)(b) == f(a, b)`
//! - **Flip**: `flip(flip(f)) == f`

use functour::compose::{__, Tuple2Ext, constant, flip, identity, lift_option2, lift_try2, memoize};
use functour::{compose, curry2, curry3, partial, pipe};
use proptest::prelude::*;
use rstest::rstest;

proptest! {
    #[test]
    fn prop_compose_is_associative(x in -10_000_i64..10_000) {
        let f = |n: i64| n + 1;
        let g = |n: i64| n * 2;
        let h = |n: i64| n - 3;
        prop_assert_eq!(compose!(f, compose!(g, h))(x), compose!(compose!(f, g), h)(x));
        prop_assert_eq!(compose!(f, g, h)(x), f(g(h(x))));
    }

    #[test]
    fn prop_identity_is_neutral_for_compose(x in any::<i32>()) {
        let f = |n: i32| n.wrapping_mul(7);
        prop_assert_eq!(compose!(f, identity)(x), f(x));
        prop_assert_eq!(compose!(identity, f)(x), f(x));
    }

    #[test]
    fn prop_pipe_is_reversed_compose(x in -10_000_i64..10_000) {
        let f = |n: i64| n + 1;
        let g = |n: i64| n * 2;
        prop_assert_eq!(pipe!(x, f, g), compose!(g, f)(x));
    }

    #[test]
    fn prop_curry2_agrees_with_the_uncurried_function(a in any::<i32>(), b in any::<i32>()) {
        let subtract = |x: i32, y: i32| x.wrapping_sub(y);
        prop_assert_eq!(curry2!(subtract)(a)(b), subtract(a, b));
    }

    #[test]
    fn prop_curry3_agrees_with_the_uncurried_function(
        a in any::<i16>(),
        b in any::<i16>(),
        c in any::<i16>(),
    ) {
        let sum = |x: i16, y: i16, z: i16| i32::from(x) + i32::from(y) + i32::from(z);
        prop_assert_eq!(curry3!(sum)(a)(b)(c), sum(a, b, c));
    }

    #[test]
    fn prop_flip_twice_is_the_original(a in any::<i32>(), b in any::<i32>()) {
        let subtract = |x: i32, y: i32| x.wrapping_sub(y);
        prop_assert_eq!(flip(flip(subtract))(a, b), subtract(a, b));
        prop_assert_eq!(flip(subtract)(a, b), subtract(b, a));
    }

    #[test]
    fn prop_partial_fixes_the_given_position(a in any::<i32>(), b in any::<i32>()) {
        let subtract = |x: i32, y: i32| x.wrapping_sub(y);
        prop_assert_eq!(partial!(subtract, a, __)(b), subtract(a, b));
        prop_assert_eq!(partial!(subtract, __, b)(a), subtract(a, b));
    }
}

#[rstest]
fn constant_ignores_its_argument() {
    let always_seven = constant(7);
    assert_eq!(always_seven("anything"), 7);
    assert_eq!(always_seven("else"), 7);
}

#[rstest]
fn curried_stage_can_be_reused() {
    let greet = curry2!(|greeting: String, name: &str| format!("{greeting}, {name}"));
    let hello = greet("Hello".to_string());
    assert_eq!(hello("Ada"), "Hello, Ada");
    assert_eq!(hello("Grace"), "Hello, Grace");
}

#[rstest]
#[case(10, 2, Some(5))]
#[case(10, 0, None)]
fn lifted_division_absorbs_the_panic(
    #[case] numerator: i32,
    #[case] denominator: i32,
    #[case] expected: Option<i32>,
) {
    let divide = lift_option2(|n: i32, d: i32| n / d);
    assert_eq!(divide(numerator, denominator), expected);
    assert_eq!(lift_try2(|n: i32, d: i32| n / d)(numerator, denominator).ok(), expected);
}

#[rstest]
fn tuple_maps_components() {
    let pair = ("Java", 8);
    let mapped = pair.map_pair(|language, version| (format!("{language}slang"), version / 4));
    assert_eq!(mapped, ("Javaslang".to_string(), 2));
    assert_eq!(pair.map_first(str::len), (4, 8));
    assert_eq!(pair.map_second(|version| version + 1), ("Java", 9));
    assert_eq!(("Java", 8).apply(|language, version| format!("{language}{version}")), "Java8");
}

#[rstest]
fn memoized_function_computes_each_argument_once() {
    let calls = std::sync::atomic::AtomicUsize::new(0);
    let square = memoize(|n: u64| {
        calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        n * n
    });

    assert_eq!(square.apply(4), 16);
    assert_eq!(square.apply(4), 16);
    assert_eq!(square.apply(5), 25);
    assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 2);
    assert_eq!(square.cached_len(), 2);
}

#![cfg(all(feature = "typeclass", feature = "control", feature = "persistent"))]
//! Functor and Monad laws for every container with an instance.
//!
//! - **Functor identity**: `fa.fmap(|x| x) == fa`
//! - **Functor composition**: `fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))`
//! - **Monad left identity**: `pure(a).flat_map(f) == f(a)`
//! - **Monad right identity**: `m.flat_map(pure) == m`
//! - **Monad associativity**

use functour::control::{Either, Try};
use functour::persistent::PersistentList;
use functour::typeclass::{Functor, Monad};
use proptest::prelude::*;

fn either_strategy() -> impl Strategy<Value = Either<String, i32>> {
    prop_oneof![
        any::<String>().prop_map(Either::Left),
        any::<i32>().prop_map(Either::Right),
    ]
}

fn halve(n: i32) -> Option<i32> {
    (n % 2 == 0).then_some(n / 2)
}

// =============================================================================
// Functor laws
// =============================================================================

proptest! {
    #[test]
    fn prop_option_functor_identity(value in proptest::option::of(any::<i32>())) {
        prop_assert_eq!(value.fmap(|x| x), value);
    }

    #[test]
    fn prop_option_functor_composition(value in proptest::option::of(any::<i32>())) {
        let f = |x: i32| x.wrapping_mul(3);
        let g = |x: i32| x.wrapping_sub(7);
        prop_assert_eq!(value.fmap(f).fmap(g), value.fmap(|x| g(f(x))));
    }

    #[test]
    fn prop_either_functor_identity(value in either_strategy()) {
        prop_assert_eq!(value.clone().fmap(|x| x), value);
    }

    #[test]
    fn prop_either_functor_composition(value in either_strategy()) {
        let f = |x: i32| i64::from(x) + 1;
        let g = |x: i64| x.to_string();
        prop_assert_eq!(value.clone().fmap(f).fmap(g), value.fmap(|x| g(f(x))));
    }

    #[test]
    fn prop_list_functor_composition(values in prop::collection::vec(any::<i16>(), 0..32)) {
        let f = |x: i16| i32::from(x) * 2;
        let g = |x: i32| x - 1;
        let list = PersistentList::of(values);
        prop_assert_eq!(list.clone().fmap(f).fmap(g), list.fmap(|x| g(f(x))));
    }
}

// =============================================================================
// Monad laws
// =============================================================================

proptest! {
    #[test]
    fn prop_option_monad_left_identity(value in any::<i32>()) {
        prop_assert_eq!(Option::pure(value).flat_map(halve), halve(value));
    }

    #[test]
    fn prop_option_monad_right_identity(value in proptest::option::of(any::<i32>())) {
        prop_assert_eq!(value.flat_map(Option::pure), value);
    }

    #[test]
    fn prop_option_monad_associativity(value in proptest::option::of(any::<i32>())) {
        let positive = |n: i32| (n > 0).then_some(n);
        prop_assert_eq!(
            value.flat_map(halve).flat_map(positive),
            value.flat_map(|x| halve(x).flat_map(positive)),
        );
    }

    #[test]
    fn prop_either_monad_right_identity(value in either_strategy()) {
        prop_assert_eq!(value.clone().flat_map(Either::pure), value);
    }

    #[test]
    fn prop_try_monad_left_identity(value in any::<i32>()) {
        let checked = |n: i32| Try::of(move || 100 / n);
        let left = Monad::flat_map(Try::pure(value), checked).ok();
        prop_assert_eq!(left, checked(value).ok());
    }
}

//! Built-in patterns.
//!
//! Every pattern implements [`Pattern`] for the subjects it understands.
//! Container patterns take an inner pattern for the contents, so patterns
//! nest the way the values do: `some(right(any()))` matches
//! `Some(Either::Right(v))` and extracts a clone of `v`.

use crate::control::{Either, Failure, Try};

use super::Unapply;

/// Extracts an output from a subject, or rejects it.
pub trait Pattern<S: ?Sized> {
    /// What a successful match hands to the arm's handler.
    type Output;

    /// Returns the extracted output if `subject` matches.
    fn unapply(&self, subject: &S) -> Option<Self::Output>;
}

// =============================================================================
// Leaf patterns
// =============================================================================

/// Matches anything, extracting a clone. See [`any`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Any;

/// Matches any subject and binds a clone of it.
#[inline]
#[must_use]
pub const fn any() -> Any {
    Any
}

impl<S: Clone> Pattern<S> for Any {
    type Output = S;

    fn unapply(&self, subject: &S) -> Option<S> {
        Some(subject.clone())
    }
}

/// Matches a subject equal to a value. See [`eq`].
#[derive(Debug, Clone, Copy)]
pub struct Equals<T>(T);

/// Matches a subject equal to `value`, extracting `()`.
#[inline]
pub const fn eq<T>(value: T) -> Equals<T> {
    Equals(value)
}

impl<T: PartialEq> Pattern<T> for Equals<T> {
    type Output = ();

    fn unapply(&self, subject: &T) -> Option<()> {
        (self.0 == *subject).then_some(())
    }
}

/// Matches a subject satisfying a predicate. See [`when`].
#[derive(Debug, Clone, Copy)]
pub struct When<F>(F);

/// Matches a subject for which `predicate` holds, extracting a clone.
#[inline]
pub const fn when<F>(predicate: F) -> When<F> {
    When(predicate)
}

impl<S: Clone, F: Fn(&S) -> bool> Pattern<S> for When<F> {
    type Output = S;

    fn unapply(&self, subject: &S) -> Option<S> {
        (self.0)(subject).then(|| subject.clone())
    }
}

/// A pattern defined by a closure. See [`from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FromFn<F>(F);

/// Turns an extraction closure into a pattern.
///
/// ```rust
/// use functour::matching::Match;
/// use functour::matching::patterns::from_fn;
///
/// let even_half = from_fn(|n: &i32| (n % 2 == 0).then_some(n / 2));
/// assert_eq!(Match::of(&8).case(even_half, |half| half).get(), Ok(4));
/// ```
#[inline]
pub const fn from_fn<F>(extract: F) -> FromFn<F> {
    FromFn(extract)
}

impl<S: ?Sized, O, F: Fn(&S) -> Option<O>> Pattern<S> for FromFn<F> {
    type Output = O;

    fn unapply(&self, subject: &S) -> Option<O> {
        (self.0)(subject)
    }
}

// =============================================================================
// Option
// =============================================================================

/// Matches `Some` whose content matches the inner pattern. See [`some`].
#[derive(Debug, Clone, Copy)]
pub struct SomeOf<P>(P);

/// Matches `Some(v)` where `inner` matches `v`.
#[inline]
pub const fn some<P>(inner: P) -> SomeOf<P> {
    SomeOf(inner)
}

impl<T, P: Pattern<T>> Pattern<Option<T>> for SomeOf<P> {
    type Output = P::Output;

    fn unapply(&self, subject: &Option<T>) -> Option<P::Output> {
        subject.as_ref().and_then(|value| self.0.unapply(value))
    }
}

/// Matches `None`. See [`none`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NoneOf;

/// Matches `None`, extracting `()`.
#[inline]
#[must_use]
pub const fn none() -> NoneOf {
    NoneOf
}

impl<T> Pattern<Option<T>> for NoneOf {
    type Output = ();

    fn unapply(&self, subject: &Option<T>) -> Option<()> {
        subject.is_none().then_some(())
    }
}

// =============================================================================
// Either
// =============================================================================

/// Matches `Either::Left`. See [`left`].
#[derive(Debug, Clone, Copy)]
pub struct LeftOf<P>(P);

/// Matches `Left(l)` where `inner` matches `l`.
#[inline]
pub const fn left<P>(inner: P) -> LeftOf<P> {
    LeftOf(inner)
}

impl<L, R, P: Pattern<L>> Pattern<Either<L, R>> for LeftOf<P> {
    type Output = P::Output;

    fn unapply(&self, subject: &Either<L, R>) -> Option<P::Output> {
        match subject {
            Either::Left(value) => self.0.unapply(value),
            Either::Right(_) => None,
        }
    }
}

/// Matches `Either::Right`. See [`right`].
#[derive(Debug, Clone, Copy)]
pub struct RightOf<P>(P);

/// Matches `Right(r)` where `inner` matches `r`.
#[inline]
pub const fn right<P>(inner: P) -> RightOf<P> {
    RightOf(inner)
}

impl<L, R, P: Pattern<R>> Pattern<Either<L, R>> for RightOf<P> {
    type Output = P::Output;

    fn unapply(&self, subject: &Either<L, R>) -> Option<P::Output> {
        match subject {
            Either::Right(value) => self.0.unapply(value),
            Either::Left(_) => None,
        }
    }
}

// =============================================================================
// Try
// =============================================================================

/// Matches `Try::Success`. See [`success`].
#[derive(Debug, Clone, Copy)]
pub struct SuccessOf<P>(P);

/// Matches `Success(v)` where `inner` matches `v`.
#[inline]
pub const fn success<P>(inner: P) -> SuccessOf<P> {
    SuccessOf(inner)
}

impl<T, P: Pattern<T>> Pattern<Try<T>> for SuccessOf<P> {
    type Output = P::Output;

    fn unapply(&self, subject: &Try<T>) -> Option<P::Output> {
        match subject {
            Try::Success(value) => self.0.unapply(value),
            Try::Failure(_) => None,
        }
    }
}

/// Matches `Try::Failure`. See [`failure`].
#[derive(Debug, Clone, Copy)]
pub struct FailureOf<P>(P);

/// Matches `Failure(f)` where `inner` matches the [`Failure`].
#[inline]
pub const fn failure<P>(inner: P) -> FailureOf<P> {
    FailureOf(inner)
}

impl<T, P: Pattern<Failure>> Pattern<Try<T>> for FailureOf<P> {
    type Output = P::Output;

    fn unapply(&self, subject: &Try<T>) -> Option<P::Output> {
        match subject {
            Try::Failure(error) => self.0.unapply(error),
            Try::Success(_) => None,
        }
    }
}

// =============================================================================
// Tuples and projections
// =============================================================================

/// Matches a pair component-wise. See [`tuple2`].
#[derive(Debug, Clone, Copy)]
pub struct Tuple2<P1, P2>(P1, P2);

/// Matches `(a, b)` where `first` matches `a` and `second` matches `b`.
#[inline]
pub const fn tuple2<P1, P2>(first: P1, second: P2) -> Tuple2<P1, P2> {
    Tuple2(first, second)
}

impl<A, B, P1, P2> Pattern<(A, B)> for Tuple2<P1, P2>
where
    P1: Pattern<A>,
    P2: Pattern<B>,
{
    type Output = (P1::Output, P2::Output);

    fn unapply(&self, subject: &(A, B)) -> Option<Self::Output> {
        let first = self.0.unapply(&subject.0)?;
        let second = self.1.unapply(&subject.1)?;
        Some((first, second))
    }
}

/// Matches a value through its [`Unapply`] projection. See [`unapply`].
#[derive(Debug, Clone, Copy)]
pub struct Unapplied<P>(P);

/// Projects the subject with [`Unapply::unapply`] and matches `parts` against
/// the result. A subject whose projection is `None` does not match.
#[inline]
pub const fn unapply<P>(parts: P) -> Unapplied<P> {
    Unapplied(parts)
}

impl<S, P> Pattern<S> for Unapplied<P>
where
    S: Unapply + ?Sized,
    P: Pattern<S::Parts>,
{
    type Output = P::Output;

    fn unapply(&self, subject: &S) -> Option<P::Output> {
        subject
            .unapply()
            .and_then(|parts| self.0.unapply(&parts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(3), Some(3))]
    #[case(None, None)]
    fn some_extracts_the_content(#[case] subject: Option<i32>, #[case] expected: Option<i32>) {
        assert_eq!(some(any()).unapply(&subject), expected);
    }

    #[rstest]
    fn none_only_matches_absence() {
        assert_eq!(Pattern::<Option<i32>>::unapply(&none(), &None), Some(()));
        assert_eq!(none().unapply(&Some(1)), None);
    }

    #[rstest]
    fn either_patterns_select_by_side() {
        let error: Either<&str, f64> = Either::Left("oops");
        assert_eq!(left(any()).unapply(&error), Some("oops"));
        assert_eq!(right(any()).unapply(&error), None);
    }

    #[rstest]
    fn try_patterns_see_the_failure() {
        let outcome: Try<i32> = Try::of(|| panic!("boom"));
        let message = failure(from_fn(|f: &Failure| Some(f.to_string()))).unapply(&outcome);
        assert_eq!(message, Some("boom".to_string()));
        assert_eq!(success(any()).unapply(&outcome), None);
    }

    #[rstest]
    fn tuple_requires_both_components() {
        let pattern = tuple2(eq(1), when(|s: &&str| s.starts_with('t')));
        assert_eq!(pattern.unapply(&(1, "tour")), Some(((), "tour")));
        assert_eq!(pattern.unapply(&(2, "tour")), None);
        assert_eq!(pattern.unapply(&(1, "vavr")), None);
    }

    #[rstest]
    fn nested_patterns_follow_the_shape() {
        let subject: Option<Either<String, (i32, i32)>> = Some(Either::Right((4, 2)));
        let pattern = some(right(tuple2(any(), eq(2))));
        assert_eq!(pattern.unapply(&subject), Some((4, ())));
    }
}

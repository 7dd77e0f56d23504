//! Functor type class - mapping over container values.
//!
//! # Laws
//!
//! - **Identity**: `fa.fmap(|x| x) == fa`
//! - **Composition**: `fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))`

use super::higher::TypeConstructor;

/// A container whose elements can be transformed without changing its shape.
///
/// Absent or failed containers (`None`, `Failure`, `Left`, `Invalid`) pass
/// through `fmap` untouched and the function is never called.
///
/// # Examples
///
/// ```rust
/// use functour::typeclass::Functor;
///
/// let present = Some("foo".to_string()).fmap(|s| s.to_uppercase());
/// assert_eq!(present, Some("FOO".to_string()));
///
/// let absent: Option<String> = None;
/// assert_eq!(absent.fmap(|s| s.len()), None);
/// ```
pub trait Functor: TypeConstructor {
    /// Applies `function` to the contained value(s).
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;
}

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnMut(A) -> B,
    {
        self.map(function)
    }
}

impl<T, E> Functor for Result<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnMut(T) -> B,
    {
        self.map(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(2), Some(4))]
    #[case(None, None)]
    fn option_fmap_doubles_present_value(#[case] input: Option<i32>, #[case] expected: Option<i32>) {
        assert_eq!(input.fmap(|x| x * 2), expected);
    }

    #[rstest]
    fn result_fmap_leaves_error_untouched() {
        let failed: Result<i32, &str> = Err("boom");
        assert_eq!(failed.fmap(|x| x + 1), Err("boom"));
    }
}

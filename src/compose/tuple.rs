//! Pair combinators.
//!
//! Rust tuples already cover construction and field access; [`Tuple2Ext`]
//! adds the transformations that treat a pair as a single value.

/// Transformations on `(A, B)`.
///
/// ```
/// use functour::compose::Tuple2Ext;
///
/// let java = ("Java", 8);
/// let vavr = java.map_pair(|name, version| (name.replace("Java", "Vavr"), version / 4));
/// assert_eq!(vavr, ("Vavr".to_string(), 2));
///
/// let described = java.apply(|name, version| format!("{name} {version}"));
/// assert_eq!(described, "Java 8");
/// ```
pub trait Tuple2Ext<A, B>: Sized {
    /// Maps both components with one binary function returning a new pair.
    fn map_pair<C, D, F>(self, function: F) -> (C, D)
    where
        F: FnOnce(A, B) -> (C, D);

    /// Maps the first component only.
    fn map_first<C, F>(self, function: F) -> (C, B)
    where
        F: FnOnce(A) -> C;

    /// Maps the second component only.
    fn map_second<D, F>(self, function: F) -> (A, D)
    where
        F: FnOnce(B) -> D;

    /// Collapses the pair into a single value.
    fn apply<R, F>(self, function: F) -> R
    where
        F: FnOnce(A, B) -> R;
}

impl<A, B> Tuple2Ext<A, B> for (A, B) {
    #[inline]
    fn map_pair<C, D, F>(self, function: F) -> (C, D)
    where
        F: FnOnce(A, B) -> (C, D),
    {
        function(self.0, self.1)
    }

    #[inline]
    fn map_first<C, F>(self, function: F) -> (C, B)
    where
        F: FnOnce(A) -> C,
    {
        (function(self.0), self.1)
    }

    #[inline]
    fn map_second<D, F>(self, function: F) -> (A, D)
    where
        F: FnOnce(B) -> D,
    {
        (self.0, function(self.1))
    }

    #[inline]
    fn apply<R, F>(self, function: F) -> R
    where
        F: FnOnce(A, B) -> R,
    {
        function(self.0, self.1)
    }
}

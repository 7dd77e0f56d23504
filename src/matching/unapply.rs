/// Projects a record into its parts for use in a pattern.
///
/// `unapply` returns `None` when the value does not have the shape the
/// projection describes, for example when an optional field is missing. Use
/// [`patterns::unapply`](super::patterns::unapply) to match on the parts.
///
/// ```rust
/// use functour::matching::{Match, Unapply};
/// use functour::matching::patterns::{any, eq, tuple2, unapply};
///
/// struct Point { x: i32, y: i32 }
///
/// impl Unapply for Point {
///     type Parts = (i32, i32);
///
///     fn unapply(&self) -> Option<(i32, i32)> {
///         Some((self.x, self.y))
///     }
/// }
///
/// let on_axis = Match::of(&Point { x: 0, y: 5 })
///     .case(unapply(tuple2(eq(0), any())), |((), y)| format!("on the y axis at {y}"))
///     .otherwise(|_| "elsewhere".to_string());
/// assert_eq!(on_axis, "on the y axis at 5");
/// ```
pub trait Unapply {
    /// The tuple of parts the value projects into.
    type Parts;

    /// Extracts the parts, or `None` if the value lacks them.
    fn unapply(&self) -> Option<Self::Parts>;
}

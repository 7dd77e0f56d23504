//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Option<_>` or `List<_>` as type constructors
//! directly. [`TypeConstructor`] works around that with a GAT naming "the same
//! container holding a different element type".
//!
//! # Example
//!
//! ```rust
//! use functour::typeclass::TypeConstructor;
//!
//! fn transform_type<T: TypeConstructor>(value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     let _ = value;
//!     Default::default()
//! }
//!
//! let some_int: Option<i32> = Some(42);
//! let none_string: Option<String> = transform_type(some_int);
//! assert_eq!(none_string, None);
//! ```

/// A type constructor `F<_>` applied to [`Self::Inner`].
pub trait TypeConstructor {
    /// The element type currently held by the container.
    type Inner;

    /// The same container holding `B` instead of `Self::Inner`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Option<i32>>();
    }

    #[test]
    fn result_with_type_keeps_error_type() {
        fn assert_with_type<T: TypeConstructor<WithType<String> = Result<String, u8>>>() {}
        assert_with_type::<Result<i32, u8>>();
    }
}

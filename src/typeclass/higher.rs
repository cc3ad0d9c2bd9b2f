//! Generic Associated Type encoding of "the same container, another element".
//!
//! [`Functor::fmap`](super::Functor::fmap) on an `OrderedSequence<A>` must
//! name `OrderedSequence<B>` as its result. `Inner` is the element type and
//! `WithType<B>` re-applies the container to `B`.

/// A container type applied to an element type.
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F` itself.
///
/// # Examples
///
/// ```rust
/// use slicewise::typeclass::TypeConstructor;
/// use slicewise::OrderedSequence;
///
/// fn assert_element<F: TypeConstructor<Inner = i32>>() {}
/// assert_element::<OrderedSequence<i32>>();
/// ```
pub trait TypeConstructor {
    /// The element type this constructor is applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

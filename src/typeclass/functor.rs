//! Element-wise mapping that keeps length and order.
//!
//! ```text
//! sequence.fmap(|x| x) == sequence
//! sequence.fmap(f).fmap(g) == sequence.fmap(|x| g(f(x)))
//! ```
//!
//! The mapped function is `FnMut` and runs once per element, front to back.

use super::higher::TypeConstructor;

/// A container whose elements can be mapped to another type.
///
/// # Examples
///
/// ```rust
/// use slicewise::typeclass::Functor;
/// use slicewise::OrderedSequence;
///
/// let numbers: OrderedSequence<i32> = (1..=3).collect();
/// let labels = numbers.fmap(|number| number.to_string());
/// assert_eq!(labels.raw(), &["1", "2", "3"]);
/// ```
pub trait Functor: TypeConstructor {
    /// Consumes the container and maps every element by value.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Maps every element by reference, leaving `self` intact.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self::Inner) -> B;
}

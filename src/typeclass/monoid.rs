//! Semigroups with an identity element.
//!
//! ```text
//! Self::empty().combine(a) == a
//! a.combine(Self::empty()) == a
//! ```

use super::semigroup::Semigroup;

/// A [`Semigroup`] with an identity element.
///
/// # Examples
///
/// ```rust
/// use slicewise::typeclass::{Monoid, Semigroup};
/// use slicewise::OrderedSequence;
///
/// let parts: Vec<OrderedSequence<i32>> = vec![vec![1].into(), vec![2, 3].into()];
/// assert_eq!(OrderedSequence::combine_all(parts).raw(), &[1, 2, 3]);
/// assert!(OrderedSequence::<i32>::empty().combine(OrderedSequence::empty()).is_empty());
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    fn empty() -> Self;

    /// Combines every value in order; [`empty`](Self::empty) when there are none.
    fn combine_all<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        values
            .into_iter()
            .reduce(Semigroup::combine)
            .unwrap_or_else(Self::empty)
    }
}

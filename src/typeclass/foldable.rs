//! Folding a container down to a single value.
//!
//! `fold_left` visits elements front to back and `fold_right` back to front.
//! Unlike [`OrderedSequence::reduce`](crate::OrderedSequence::reduce), both
//! consume the container and hand each element over by value.

use super::higher::TypeConstructor;

/// A container that can be folded in either direction.
///
/// # Examples
///
/// ```rust
/// use slicewise::typeclass::Foldable;
/// use slicewise::OrderedSequence;
///
/// let words: OrderedSequence<&str> = vec!["a", "b", "c"].into();
/// assert_eq!(words.clone().fold_left(String::new(), |joined, word| joined + word), "abc");
/// assert_eq!(words.fold_right(String::new(), |word, joined| joined + word), "cba");
/// ```
pub trait Foldable: TypeConstructor {
    /// Folds front to back.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds back to front; `function` receives the element first.
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Number of elements a fold would visit.
    fn length(&self) -> usize;

    /// Returns `true` when a fold would return its initial value untouched.
    #[inline]
    fn is_empty(&self) -> bool {
        self.length() == 0
    }
}

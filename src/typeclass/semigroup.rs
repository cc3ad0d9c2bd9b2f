//! Associative combination.
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```

/// A type with an associative binary operation.
///
/// For [`OrderedSequence`](crate::OrderedSequence), `combine` is
/// concatenation that reuses the left operand's buffer.
///
/// # Examples
///
/// ```rust
/// use slicewise::typeclass::Semigroup;
/// use slicewise::OrderedSequence;
///
/// let left: OrderedSequence<i32> = vec![1, 2].into();
/// let right: OrderedSequence<i32> = vec![3].into();
/// assert_eq!(left.combine(right).raw(), &[1, 2, 3]);
/// ```
pub trait Semigroup {
    /// Combines two values into one.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines clones of both operands.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OrderedSequence;
    use rstest::rstest;

    #[rstest]
    fn sequence_combine_ref_keeps_operands() {
        let left: OrderedSequence<i32> = (1..=2).collect();
        let right: OrderedSequence<i32> = (3..=4).collect();
        let combined = left.combine_ref(&right);
        assert_eq!(combined.raw(), &[1, 2, 3, 4]);
        assert_eq!(left.len(), 2);
        assert_eq!(right.len(), 2);
    }

    #[rstest]
    fn sequence_combine_is_associative() {
        let first: OrderedSequence<i32> = vec![1].into();
        let second: OrderedSequence<i32> = vec![2, 3].into();
        let third: OrderedSequence<i32> = vec![4].into();
        assert_eq!(
            first.clone().combine(second.clone()).combine(third.clone()),
            first.combine(second.combine(third))
        );
    }
}

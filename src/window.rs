//! Sliding-window extrema built on [`MonotonicWindowQueue`].
//!
//! For every window of `width` consecutive values these functions report the
//! optimum of that window in O(N) total time. The queue holds
//! `(position, value)` pairs; after each push, fronts whose position has left
//! the window are popped, which is the external staleness check the queue
//! itself does not perform.
//!
//! # Examples
//!
//! ```rust
//! use slicewise::window::{sliding_maximums, sliding_minimums};
//!
//! let values = [4, 2, 12, 3, 8, 5];
//! assert_eq!(sliding_minimums(values, 3).raw(), &[2, 2, 3, 3]);
//! assert_eq!(sliding_maximums(values, 3).raw(), &[12, 12, 12, 8]);
//! ```

use std::cmp::Ordering;

use crate::contract::Comparer;
use crate::monotone::{Direction, MonotonicWindowQueue};
use crate::sequence::OrderedSequence;

/// Returns the minimum of every window of `width` consecutive values.
///
/// The result has `len - width + 1` elements (none if `width` is 0 or larger
/// than the input).
pub fn sliding_minimums<T, I>(values: I, width: usize) -> OrderedSequence<T>
where
    I: IntoIterator<Item = T>,
    T: Comparer + Clone,
{
    sliding_extrema_by(values, width, Direction::Minimum, T::compare)
}

/// Returns the maximum of every window of `width` consecutive values.
pub fn sliding_maximums<T, I>(values: I, width: usize) -> OrderedSequence<T>
where
    I: IntoIterator<Item = T>,
    T: Comparer + Clone,
{
    sliding_extrema_by(values, width, Direction::Maximum, T::compare)
}

/// Returns the optimum under `order` and `direction` of every window of
/// `width` consecutive values.
///
/// # Examples
///
/// ```rust
/// use slicewise::Direction;
/// use slicewise::window::sliding_extrema_by;
///
/// let words = ["a", "abc", "ab", "abcd"];
/// let longest = sliding_extrema_by(words, 2, Direction::Maximum, |left: &&str, right: &&str| {
///     left.len().cmp(&right.len())
/// });
/// assert_eq!(longest.raw(), &["abc", "abc", "abcd"]);
/// ```
pub fn sliding_extrema_by<T, I, O>(
    values: I,
    width: usize,
    direction: Direction,
    order: O,
) -> OrderedSequence<T>
where
    I: IntoIterator<Item = T>,
    T: Clone,
    O: Fn(&T, &T) -> Ordering,
{
    if width == 0 {
        return OrderedSequence::new();
    }

    let mut queue = MonotonicWindowQueue::new(
        direction,
        |left: &(usize, T), right: &(usize, T)| order(&left.1, &right.1),
    );
    let mut extrema = OrderedSequence::new();

    for (position, value) in values.into_iter().enumerate() {
        queue.push((position, value));
        while queue
            .peek()
            .is_some_and(|(front_position, _)| position - front_position >= width)
        {
            queue.pop();
        }
        if position + 1 >= width
            && let Some((_, optimum)) = queue.peek()
        {
            extrema.append([optimum.clone()]);
        }
    }

    extrema
}

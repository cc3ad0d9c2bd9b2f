//! Monotonic window queue.
//!
//! This module provides [`MonotonicWindowQueue`], a double-ended queue that
//! keeps its elements monotonic under a caller-supplied ordering.
//!
//! # Overview
//!
//! Every [`push`](MonotonicWindowQueue::push) first discards, from the back,
//! every element that the incoming value makes permanently inferior, and then
//! appends the value. The front is therefore always the optimum (minimum or
//! maximum, depending on the [`Direction`]) of the elements still queued.
//!
//! Each element is appended once and evicted at most once, so a run of N
//! pushes costs O(N) comparisons in total: amortized O(1) per push.
//!
//! The queue never refuses a value and never drops from the front by itself.
//! Removing fronts that fell out of a window is the caller's job, usually by
//! queueing `(position, value)` pairs and popping while the front position
//! is stale. [`sliding_minimums`](crate::window::sliding_minimums) is built
//! exactly that way.
//!
//! # Examples
//!
//! ```rust
//! use slicewise::MonotonicWindowQueue;
//!
//! let mut queue = MonotonicWindowQueue::minimum();
//! for value in [5, 3, 4] {
//!     queue.push(value);
//! }
//! assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![3, 4]);
//!
//! queue.push(2);
//! assert_eq!(queue.peek(), Some(&2));
//! assert_eq!(queue.len(), 1);
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;

use crate::contract::{Comparer, Container, MonotoneQueue, Peeker, Slicer};
use crate::sequence::OrderedSequence;

/// The natural ordering of a [`Comparer`] type, as a function pointer.
pub type NaturalOrder<T> = fn(&T, &T) -> Ordering;

/// Which end of the ordering a [`MonotonicWindowQueue`] keeps at its front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// The front holds the smallest element; contents are strictly increasing.
    #[default]
    Minimum,
    /// The front holds the largest element; contents are strictly decreasing.
    Maximum,
}

impl Direction {
    /// Returns `true` if an element comparing as `ordering` against a newer
    /// value can still become the optimum, i.e. it must stay queued.
    #[inline]
    const fn retains(self, ordering: Ordering) -> bool {
        match self {
            Self::Minimum => matches!(ordering, Ordering::Less),
            Self::Maximum => matches!(ordering, Ordering::Greater),
        }
    }
}

/// A deque that stays monotonic under an ordering function.
///
/// `order(a, b)` compares two elements. For [`Direction::Minimum`] a queued
/// element survives a push only if it is strictly `Less` than the incoming
/// value; equal or greater elements are evicted. [`Direction::Maximum`] is the
/// mirror image.
///
/// # Time Complexity
///
/// | Operation | Complexity       |
/// |-----------|------------------|
/// | `push`    | O(1) amortized   |
/// | `pop`     | O(1)             |
/// | `peek`    | O(1)             |
/// | `len`     | O(1)             |
///
/// # Examples
///
/// ```rust
/// use slicewise::{Direction, MonotonicWindowQueue};
///
/// // Maximum by string length.
/// let mut queue = MonotonicWindowQueue::new(Direction::Maximum, |left: &&str, right: &&str| {
///     left.len().cmp(&right.len())
/// });
/// queue.push("tree");
/// queue.push("ox");
/// queue.push("bird");
///
/// assert_eq!(queue.peek(), Some(&"bird"));
/// assert_eq!(queue.len(), 1);
/// ```
#[derive(Clone)]
pub struct MonotonicWindowQueue<T, O> {
    elements: VecDeque<T>,
    order: O,
    direction: Direction,
}

impl<T, O> MonotonicWindowQueue<T, O>
where
    O: Fn(&T, &T) -> Ordering,
{
    /// Creates an empty queue with the given direction and ordering.
    #[must_use]
    pub const fn new(direction: Direction, order: O) -> Self {
        Self {
            elements: VecDeque::new(),
            order,
            direction,
        }
    }

    /// Creates an empty queue whose front is the minimum under `order`.
    #[must_use]
    pub const fn minimum_by(order: O) -> Self {
        Self::new(Direction::Minimum, order)
    }

    /// Creates an empty queue whose front is the maximum under `order`.
    #[must_use]
    pub const fn maximum_by(order: O) -> Self {
        Self::new(Direction::Maximum, order)
    }

    /// Pushes `value` to the back, first evicting every back element it
    /// makes permanently inferior.
    ///
    /// Returns the number of evicted elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicewise::MonotonicWindowQueue;
    ///
    /// let mut queue = MonotonicWindowQueue::minimum();
    /// assert_eq!(queue.push(5), 0);
    /// assert_eq!(queue.push(3), 1);
    /// assert_eq!(queue.push(4), 0);
    /// assert_eq!(queue.push(2), 2);
    /// assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![2]);
    /// ```
    pub fn push(&mut self, value: T) -> usize {
        let mut evicted = 0;
        while let Some(back) = self.elements.back() {
            if self.direction.retains((self.order)(back, &value)) {
                break;
            }
            self.elements.pop_back();
            evicted += 1;
        }
        self.elements.push_back(value);
        trace_event!(
            evicted,
            length = self.elements.len(),
            direction = ?self.direction,
            "monotonic push"
        );
        evicted
    }
}

impl<T: Comparer> MonotonicWindowQueue<T, NaturalOrder<T>> {
    /// Creates an empty queue whose front is the minimum in [`Comparer`] order.
    #[must_use]
    pub fn minimum() -> Self {
        Self::new(Direction::Minimum, T::compare)
    }

    /// Creates an empty queue whose front is the maximum in [`Comparer`] order.
    #[must_use]
    pub fn maximum() -> Self {
        Self::new(Direction::Maximum, T::compare)
    }
}

impl<T, O> MonotonicWindowQueue<T, O> {
    /// Removes and returns the front element, the current optimum.
    ///
    /// Returns `None` if the queue is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.elements.pop_front()
    }

    /// Returns the front element without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.elements.front()
    }

    /// Returns the most recently pushed element that is still queued.
    #[must_use]
    pub fn peek_back(&self) -> Option<&T> {
        self.elements.back()
    }

    /// Returns the number of queued elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Removes every element; the ordering and direction are kept.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Returns the configured direction.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns an iterator over the queued elements, front to back.
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, T> {
        self.elements.iter()
    }
}

impl<T: Comparer> Default for MonotonicWindowQueue<T, NaturalOrder<T>> {
    fn default() -> Self {
        Self::minimum()
    }
}

impl<T: fmt::Debug, O> fmt::Debug for MonotonicWindowQueue<T, O> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("MonotonicWindowQueue")
            .field("direction", &self.direction)
            .field("elements", &self.elements)
            .finish_non_exhaustive()
    }
}

impl<'a, T, O> IntoIterator for &'a MonotonicWindowQueue<T, O> {
    type Item = &'a T;
    type IntoIter = std::collections::vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

// =============================================================================
// Contract Implementations
// =============================================================================

impl<T, O> Container for MonotonicWindowQueue<T, O> {
    #[inline]
    fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[inline]
    fn len(&self) -> usize {
        self.elements.len()
    }

    fn clear(&mut self) {
        self.elements.clear();
    }
}

impl<T, O> Peeker<T> for MonotonicWindowQueue<T, O> {
    #[inline]
    fn peek(&self) -> Option<&T> {
        self.elements.front()
    }
}

impl<T, O> MonotoneQueue<T> for MonotonicWindowQueue<T, O>
where
    O: Fn(&T, &T) -> Ordering,
{
    fn push(&mut self, element: T) {
        Self::push(self, element);
    }

    fn pop(&mut self) -> Option<T> {
        self.elements.pop_front()
    }
}

impl<T: Clone, O> Slicer<T> for MonotonicWindowQueue<T, O> {
    fn to_sequence(&self) -> OrderedSequence<T> {
        self.elements.iter().cloned().collect()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn contents<T: Clone, O>(queue: &MonotonicWindowQueue<T, O>) -> Vec<T> {
        queue.iter().cloned().collect()
    }

    #[rstest]
    fn test_minimum_scenario_leaves_last_smallest() {
        let mut queue = MonotonicWindowQueue::minimum();
        for value in [5, 3, 4, 2] {
            queue.push(value);
        }
        assert_eq!(contents(&queue), vec![2]);
    }

    #[rstest]
    fn test_minimum_keeps_increasing_run() {
        let mut queue = MonotonicWindowQueue::minimum();
        for value in [1, 2, 3] {
            queue.push(value);
        }
        assert_eq!(contents(&queue), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_minimum_evicts_equal_back() {
        let mut queue = MonotonicWindowQueue::minimum();
        queue.push(1);
        queue.push(4);
        assert_eq!(queue.push(4), 1);
        assert_eq!(contents(&queue), vec![1, 4]);
    }

    #[rstest]
    fn test_maximum_keeps_decreasing_run() {
        let mut queue = MonotonicWindowQueue::maximum();
        for value in [2, 9, 4, 7, 1] {
            queue.push(value);
        }
        assert_eq!(contents(&queue), vec![9, 7, 1]);
    }

    #[rstest]
    fn test_push_worse_than_front_is_accepted() {
        let mut queue = MonotonicWindowQueue::minimum();
        queue.push(1);
        queue.push(100);
        assert_eq!(queue.peek(), Some(&1));
        assert_eq!(queue.peek_back(), Some(&100));
    }

    #[rstest]
    fn test_pop_returns_fronts_in_order() {
        let mut queue = MonotonicWindowQueue::minimum();
        for value in [1, 3, 5] {
            queue.push(value);
        }
        assert_eq!(queue.pop(), Some(1));
        assert_eq!(queue.pop(), Some(3));
        assert_eq!(queue.pop(), Some(5));
        assert_eq!(queue.pop(), None);
        assert_eq!(queue.peek(), None);
    }

    #[rstest]
    fn test_custom_order_on_keys() {
        let mut queue =
            MonotonicWindowQueue::minimum_by(|left: &(char, i32), right: &(char, i32)| {
                left.1.cmp(&right.1)
            });
        queue.push(('a', 3));
        queue.push(('b', 1));
        queue.push(('c', 2));
        assert_eq!(contents(&queue), vec![('b', 1), ('c', 2)]);
        assert_eq!(queue.direction(), Direction::Minimum);
    }

    #[rstest]
    fn test_inconsistent_order_does_not_panic() {
        let mut queue = MonotonicWindowQueue::new(Direction::Maximum, |_: &i32, _: &i32| {
            Ordering::Equal
        });
        for value in 0..10 {
            assert_eq!(queue.push(value), usize::from(value > 0));
        }
        assert_eq!(contents(&queue), vec![9]);
    }

    #[rstest]
    fn test_clear_keeps_direction() {
        let mut queue: MonotonicWindowQueue<i32, _> = MonotonicWindowQueue::maximum();
        queue.push(3);
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.direction(), Direction::Maximum);
    }

    #[rstest]
    fn test_monotone_queue_contract() {
        fn fill<Q: MonotoneQueue<i32>>(queue: &mut Q, values: &[i32]) {
            for &value in values {
                queue.push(value);
            }
        }
        let mut queue = MonotonicWindowQueue::<i32, NaturalOrder<i32>>::default();
        fill(&mut queue, &[4, 2, 6]);
        assert_eq!(Peeker::peek(&queue), Some(&2));
        assert_eq!(Container::len(&queue), 2);
        assert_eq!(queue.to_sequence().raw(), &[2, 6]);
        assert_eq!(MonotoneQueue::pop(&mut queue), Some(2));
    }

    #[rstest]
    fn test_debug_shows_direction_and_elements() {
        let mut queue = MonotonicWindowQueue::minimum();
        queue.push(1);
        assert_eq!(
            format!("{queue:?}"),
            "MonotonicWindowQueue { direction: Minimum, elements: [1], .. }"
        );
    }
}

//! Resizable ordered sequence with a functional-transformation API.
//!
//! This module provides [`OrderedSequence`], a contiguous, indexable sequence
//! that combines in-place structural edits with whole-sequence transforms.
//!
//! # Overview
//!
//! `OrderedSequence` owns a single contiguous buffer. It provides:
//!
//! - O(1) `len`, `is_empty`, `get`
//! - O(1) amortized `pop` and `append` of a single element
//! - O(n) `pop_front`, `prepend`, `insert`, `remove` (elements are shifted)
//! - O(n + k) `splice` where k is the number of inserted elements
//! - O(n log n) `sort` (in-place heap sort, unstable)
//!
//! Mutating operations (`append`, `prepend`, `reverse`, `sort`, ...) edit the
//! sequence in place and return `&mut Self` so that they can be chained.
//! Transforms (`map`, `filter`, `reject`, `slice`, `concat`) never touch the
//! receiver and return newly-owned sequences.
//!
//! # Index Arithmetic
//!
//! `slice`, `splice` and `insert` take signed positions. A negative position
//! counts from the back (`-1` is the last element) and every position is
//! clamped into `[0, len]`, so out-of-range arguments never fail.
//!
//! # Examples
//!
//! ```rust
//! use slicewise::OrderedSequence;
//!
//! let mut sequence: OrderedSequence<i32> = (1..=5).collect();
//!
//! sequence.append([6, 7]).prepend([-1, 0]).reverse();
//! assert_eq!(sequence.raw(), &[7, 6, 5, 4, 3, 2, 1, 0, -1]);
//!
//! let evens = sequence.filter(|element| element % 2 == 0);
//! assert_eq!(evens.raw(), &[6, 4, 2, 0]);
//!
//! let last_three = sequence.slice(Some(-3), None);
//! assert_eq!(last_three.raw(), &[1, 0, -1]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Index, IndexMut};

use crate::contract::{Comparer, Container, IndexRanger, Peeker, Slicer, Stack};
use crate::error::IndexOutOfBoundsError;

#[cfg(feature = "typeclass")]
use crate::typeclass::{Foldable, Functor, Monoid, Semigroup, TypeConstructor};

// =============================================================================
// Constants
// =============================================================================

/// Delete count accepted by [`OrderedSequence::splice`] meaning "remove every
/// element from `start` through the end".
pub const DELETE_THROUGH_END: isize = -1;

// =============================================================================
// OrderedSequence Definition
// =============================================================================

/// A resizable, indexable sequence with in-place edits and functional transforms.
///
/// # Time Complexity
///
/// | Operation        | Complexity          |
/// |------------------|---------------------|
/// | `new`            | O(1)                |
/// | `len`            | O(1)                |
/// | `get`            | O(1)                |
/// | `pop`            | O(1)                |
/// | `pop_front`      | O(N)                |
/// | `append`         | O(k) amortized      |
/// | `prepend`        | O(N + k)            |
/// | `splice`         | O(N + k)            |
/// | `sort`           | O(N log N)          |
/// | `map` / `filter` | O(N)                |
///
/// # Raw Views
///
/// [`raw`](Self::raw) and [`raw_mut`](Self::raw_mut) expose the live backing
/// storage. A raw view borrows the sequence, so it cannot outlive the next
/// structural edit; reallocation can never leave a dangling view behind.
///
/// # Examples
///
/// ```rust
/// use slicewise::OrderedSequence;
///
/// let mut sequence = OrderedSequence::new();
/// sequence.append([3, 1, 2]);
/// sequence.sort_by(|left, right| left < right);
///
/// assert_eq!(sequence.raw(), &[1, 2, 3]);
/// assert_eq!(sequence.pop(), Some(3));
/// assert_eq!(sequence.pop_front(), Some(1));
/// assert_eq!(sequence.len(), 1);
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrderedSequence<T> {
    elements: Vec<T>,
}

static_assertions::assert_impl_all!(OrderedSequence<i32>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(OrderedSequence<std::rc::Rc<i32>>: Send, Sync);

/// Resolves a signed position against `length`.
///
/// Negative positions count from the end; the result is clamped to `[0, length]`.
#[inline]
fn resolve_index(index: isize, length: usize) -> usize {
    if index < 0 {
        length.saturating_sub(index.unsigned_abs())
    } else {
        index.unsigned_abs().min(length)
    }
}

/// Sorts `elements` in place with a heap sort driven by an index predicate.
///
/// `less(raw, i, j)` is asked whether the element currently at `i` sorts
/// before the element currently at `j`. Every index handed to `less` is in
/// bounds and elements only move through swaps, so an inconsistent predicate
/// scrambles the order but never loses or duplicates an element.
fn heap_sort_by<T, F>(elements: &mut [T], mut less: F)
where
    F: FnMut(&[T], usize, usize) -> bool,
{
    let length = elements.len();
    if length < 2 {
        return;
    }

    for root in (0..length / 2).rev() {
        sift_down(elements, root, length, &mut less);
    }

    for end in (1..length).rev() {
        elements.swap(0, end);
        sift_down(elements, 0, end, &mut less);
    }
}

fn sift_down<T, F>(elements: &mut [T], mut root: usize, end: usize, less: &mut F)
where
    F: FnMut(&[T], usize, usize) -> bool,
{
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            return;
        }
        if child + 1 < end && less(&*elements, child, child + 1) {
            child += 1;
        }
        if !less(&*elements, root, child) {
            return;
        }
        elements.swap(root, child);
        root = child;
    }
}

impl<T> OrderedSequence<T> {
    /// Creates a new empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicewise::OrderedSequence;
    ///
    /// let sequence: OrderedSequence<i32> = OrderedSequence::new();
    /// assert!(sequence.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Creates a new empty sequence with room for at least `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the sequence.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the sequence contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the number of elements the sequence can hold without reallocating.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    /// Removes every element.
    ///
    /// The reserved capacity is kept, so refilling the sequence does not
    /// reallocate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicewise::OrderedSequence;
    ///
    /// let mut sequence: OrderedSequence<i32> = (0..100).collect();
    /// let capacity = sequence.capacity();
    /// sequence.clear();
    ///
    /// assert!(sequence.is_empty());
    /// assert_eq!(sequence.capacity(), capacity);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Returns the live backing storage.
    #[inline]
    #[must_use]
    pub fn raw(&self) -> &[T] {
        &self.elements
    }

    /// Returns the live backing storage for in-place writes.
    ///
    /// Writes through the view are visible to the sequence. The view cannot
    /// change the length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicewise::OrderedSequence;
    ///
    /// let mut sequence: OrderedSequence<i32> = (1..=3).collect();
    /// sequence.raw_mut()[1] = 20;
    /// assert_eq!(sequence.raw(), &[1, 20, 3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn raw_mut(&mut self) -> &mut [T] {
        &mut self.elements
    }

    /// Returns a reference to the element at `index`, or `None` if out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Returns a mutable reference to the element at `index`, or `None` if out of bounds.
    #[inline]
    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.elements.get_mut(index)
    }

    /// Returns the first element, or `None` if the sequence is empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Returns the last element, or `None` if the sequence is empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Returns an iterator over the elements, front to back.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns an iterator that allows modifying each element.
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.elements.iter_mut()
    }

    /// Consumes the sequence and returns its backing vector.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Removes the last element and returns it, or `None` if the sequence is empty.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.elements.pop()
    }

    /// Removes the first element and returns it, or `None` if the sequence is empty.
    ///
    /// # Complexity
    ///
    /// O(N): the backing storage is contiguous, so the remaining elements are
    /// shifted one slot to the front.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicewise::OrderedSequence;
    ///
    /// let mut sequence: OrderedSequence<i32> = (1..=2).collect();
    /// assert_eq!(sequence.pop_front(), Some(1));
    /// assert_eq!(sequence.pop_front(), Some(2));
    /// assert_eq!(sequence.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.elements.is_empty() {
            None
        } else {
            Some(self.elements.remove(0))
        }
    }

    /// Appends `elements` to the end, preserving their order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicewise::OrderedSequence;
    ///
    /// let mut sequence = OrderedSequence::new();
    /// sequence.append([1, 2]).append(vec![3]);
    /// assert_eq!(sequence.raw(), &[1, 2, 3]);
    /// ```
    pub fn append<I>(&mut self, elements: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        self.elements.extend(elements);
        self
    }

    /// Inserts `elements` at the start, preserving their order.
    ///
    /// The first of the prepended elements ends up first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicewise::OrderedSequence;
    ///
    /// let mut sequence: OrderedSequence<i32> = (3..=4).collect();
    /// sequence.prepend([1, 2]);
    /// assert_eq!(sequence.raw(), &[1, 2, 3, 4]);
    /// ```
    pub fn prepend<I>(&mut self, elements: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        self.elements.splice(0..0, elements).for_each(drop);
        self
    }

    /// Inserts `element` at the signed position `index`.
    ///
    /// The position is resolved like [`splice`](Self::splice): negative values
    /// count from the end and the result is clamped into `[0, len]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicewise::OrderedSequence;
    ///
    /// let mut sequence: OrderedSequence<i32> = (1..=3).collect();
    /// sequence.insert(-1, 9).insert(100, 10);
    /// assert_eq!(sequence.raw(), &[1, 2, 9, 3, 10]);
    /// ```
    pub fn insert(&mut self, index: isize, element: T) -> &mut Self {
        let position = resolve_index(index, self.elements.len());
        self.elements.insert(position, element);
        self
    }

    /// Removes and returns the element at `index`, or `None` if out of bounds.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index < self.elements.len() {
            Some(self.elements.remove(index))
        } else {
            None
        }
    }

    /// Replaces the element at `index` and returns the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfBoundsError`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicewise::OrderedSequence;
    ///
    /// let mut sequence: OrderedSequence<i32> = (1..=3).collect();
    /// assert_eq!(sequence.set(0, 10), Ok(1));
    /// assert!(sequence.set(3, 40).is_err());
    /// ```
    pub fn set(&mut self, index: usize, element: T) -> Result<T, IndexOutOfBoundsError> {
        let length = self.elements.len();
        self.elements
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, element))
            .ok_or(IndexOutOfBoundsError { index, length })
    }

    /// Swaps the elements at `first` and `second`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfBoundsError`] for the first index that is `>= len`.
    pub fn swap(&mut self, first: usize, second: usize) -> Result<&mut Self, IndexOutOfBoundsError> {
        let length = self.elements.len();
        if let Some(&index) = [first, second].iter().find(|&&index| index >= length) {
            return Err(IndexOutOfBoundsError { index, length });
        }
        self.elements.swap(first, second);
        Ok(self)
    }

    /// Reverses the order of the elements in place.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicewise::OrderedSequence;
    ///
    /// let mut sequence: OrderedSequence<i32> = (1..=3).collect();
    /// assert_eq!(sequence.reverse().raw(), &[3, 2, 1]);
    /// ```
    pub fn reverse(&mut self) -> &mut Self {
        self.elements.reverse();
        self
    }

    /// Sorts the sequence in place using an index predicate.
    ///
    /// `compare(raw, i, j)` must return `true` when the element at `i` sorts
    /// before the element at `j`, where `raw` is the current backing storage.
    ///
    /// The sort is an in-place heap sort: O(N log N), no allocation, and
    /// **not stable**. If `compare` is not a strict weak ordering the
    /// resulting order is unspecified, but the sort still terminates without
    /// panicking and the sequence keeps exactly the same elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicewise::OrderedSequence;
    ///
    /// let mut sequence: OrderedSequence<i32> = vec![3, 1, 2].into();
    /// sequence.sort(|raw, i, j| raw[i] > raw[j]);
    /// assert_eq!(sequence.raw(), &[3, 2, 1]);
    /// ```
    pub fn sort<F>(&mut self, compare: F) -> &mut Self
    where
        F: FnMut(&[T], usize, usize) -> bool,
    {
        trace_event!(length = self.elements.len(), "sort");
        heap_sort_by(&mut self.elements, compare);
        self
    }

    /// Sorts the sequence in place using an element predicate.
    ///
    /// `less(a, b)` returns `true` when `a` sorts before `b`. Same algorithm
    /// and guarantees as [`sort`](Self::sort).
    pub fn sort_by<F>(&mut self, mut less: F) -> &mut Self
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.sort(|raw, first, second| less(&raw[first], &raw[second]))
    }

    /// Sorts the sequence in place in ascending [`Comparer`] order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicewise::OrderedSequence;
    ///
    /// let mut sequence: OrderedSequence<&str> = vec!["pear", "apple", "fig"].into();
    /// sequence.sort_by_comparer();
    /// assert_eq!(sequence.raw(), &["apple", "fig", "pear"]);
    /// ```
    pub fn sort_by_comparer(&mut self) -> &mut Self
    where
        T: Comparer,
    {
        self.sort_by(|left, right| left.compare(right) == Ordering::Less)
    }

    /// Removes `delete_count` elements starting at `start`, inserts
    /// `elements` in their place, and returns the removed elements.
    ///
    /// 1. `start` is resolved: negative values count from the end, then it is
    ///    clamped into `[0, len]`.
    /// 2. A `delete_count` of [`DELETE_THROUGH_END`] (`-1`) removes every
    ///    element from `start` to the end.
    /// 3. Any other `delete_count` is clamped into `[0, len - start]`.
    /// 4. The removed elements are returned in their original order and the
    ///    inserted ones appear at `start` in the order given.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicewise::OrderedSequence;
    ///
    /// let mut sequence: OrderedSequence<i32> = (1..=5).collect();
    /// let removed = sequence.splice(1, 2, [9, 9]);
    /// assert_eq!(sequence.raw(), &[1, 9, 9, 4, 5]);
    /// assert_eq!(removed.raw(), &[2, 3]);
    ///
    /// let mut sequence: OrderedSequence<i32> = (1..=3).collect();
    /// let removed = sequence.splice(1, -1, []);
    /// assert_eq!(sequence.raw(), &[1]);
    /// assert_eq!(removed.raw(), &[2, 3]);
    /// ```
    pub fn splice<I>(&mut self, start: isize, delete_count: isize, elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let length = self.elements.len();
        let start = resolve_index(start, length);
        let available = length - start;
        let count = match delete_count {
            DELETE_THROUGH_END => available,
            _ => usize::try_from(delete_count).map_or(0, |count| count.min(available)),
        };

        let removed: Vec<T> = self.elements.splice(start..start + count, elements).collect();
        trace_event!(
            start,
            deleted = removed.len(),
            length = self.elements.len(),
            "splice"
        );
        Self { elements: removed }
    }

    /// Projects every element and returns a sequence of the results.
    ///
    /// The receiver is not modified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicewise::OrderedSequence;
    ///
    /// let sequence: OrderedSequence<i32> = (1..=3).collect();
    /// let labels = sequence.map(|element| format!("#{element}"));
    /// assert_eq!(labels.raw(), &["#1", "#2", "#3"]);
    /// ```
    pub fn map<B, F>(&self, project: F) -> OrderedSequence<B>
    where
        F: FnMut(&T) -> B,
    {
        OrderedSequence {
            elements: self.elements.iter().map(project).collect(),
        }
    }

    /// Returns `true` if `predicate` holds for every element.
    ///
    /// Stops at the first element that fails. An empty sequence returns `true`.
    pub fn every<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.elements.iter().all(predicate)
    }

    /// Returns `true` if `predicate` holds for any element.
    ///
    /// Stops at the first element that passes. An empty sequence returns `false`.
    pub fn some<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.elements.iter().any(predicate)
    }

    /// Folds the elements front to back.
    ///
    /// `function(accumulator, element, index)` is called with `index`
    /// increasing from 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicewise::OrderedSequence;
    ///
    /// let sequence: OrderedSequence<i32> = (1..=4).collect();
    /// let weighted = sequence.reduce(0, |accumulator, element, index| {
    ///     accumulator + element * i32::try_from(index).unwrap()
    /// });
    /// assert_eq!(weighted, 2 + 6 + 12);
    /// ```
    pub fn reduce<B, F>(&self, initial: B, mut function: F) -> B
    where
        F: FnMut(B, &T, usize) -> B,
    {
        self.elements
            .iter()
            .enumerate()
            .fold(initial, |accumulator, (index, element)| {
                function(accumulator, element, index)
            })
    }

    /// Folds the elements back to front.
    ///
    /// `function(accumulator, element, index)` receives each element's
    /// position counted from the front, so the indices visited are
    /// `len - 1, ..., 1, 0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicewise::OrderedSequence;
    ///
    /// let sequence: OrderedSequence<i32> = (1..=4).collect();
    /// let mut visited = Vec::new();
    /// let sum = sequence.reduce_right(0, |accumulator, element, index| {
    ///     visited.push(index);
    ///     accumulator + element
    /// });
    /// assert_eq!(sum, 10);
    /// assert_eq!(visited, vec![3, 2, 1, 0]);
    /// ```
    pub fn reduce_right<B, F>(&self, initial: B, mut function: F) -> B
    where
        F: FnMut(B, &T, usize) -> B,
    {
        self.elements
            .iter()
            .enumerate()
            .rev()
            .fold(initial, |accumulator, (index, element)| {
                function(accumulator, element, index)
            })
    }
}

impl<T: Clone> OrderedSequence<T> {
    /// Returns a new sequence holding `self` followed by `other`.
    ///
    /// Neither operand is modified.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        let mut elements = Vec::with_capacity(self.elements.len() + other.elements.len());
        elements.extend_from_slice(&self.elements);
        elements.extend_from_slice(&other.elements);
        Self { elements }
    }

    /// Returns a copy of the elements in `[start, end)`.
    ///
    /// Negative bounds count from the end (`-1` is the last element). An
    /// omitted `start` defaults to 0 and an omitted `end` to `len`. Bounds are
    /// clamped into `[0, len]`; when `start >= end` the result is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicewise::OrderedSequence;
    ///
    /// let sequence: OrderedSequence<i32> = (0..10).collect();
    ///
    /// assert_eq!(sequence.slice(Some(2), Some(5)).raw(), &[2, 3, 4]);
    /// assert_eq!(sequence.slice(Some(-2), None).raw(), &[8, 9]);
    /// assert_eq!(sequence.slice(None, Some(-8)).raw(), &[0, 1]);
    /// assert_eq!(sequence.slice(Some(7), Some(100)).raw(), &[7, 8, 9]);
    /// assert!(sequence.slice(Some(5), Some(2)).is_empty());
    /// assert_eq!(sequence.slice(None, None), sequence);
    /// ```
    #[must_use]
    pub fn slice(&self, start: Option<isize>, end: Option<isize>) -> Self {
        let length = self.elements.len();
        let start = start.map_or(0, |index| resolve_index(index, length));
        let end = end.map_or(length, |index| resolve_index(index, length));

        if start >= end {
            trace_event!(start, end, length, "slice bounds cross, returning empty");
            return Self::new();
        }

        Self {
            elements: self.elements[start..end].to_vec(),
        }
    }

    /// Returns the elements for which `predicate` is `true`, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicewise::OrderedSequence;
    ///
    /// let sequence: OrderedSequence<i32> = (1..=6).collect();
    /// assert_eq!(sequence.filter(|element| element % 3 == 0).raw(), &[3, 6]);
    /// ```
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.elements
            .iter()
            .filter(|element| predicate(*element))
            .cloned()
            .collect()
    }

    /// Returns the elements for which `predicate` is `false`, in order.
    #[must_use]
    pub fn reject<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.filter(|element| !predicate(element))
    }
}

// =============================================================================
// Contract Implementations
// =============================================================================

impl<T> Container for OrderedSequence<T> {
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

impl<T> Peeker<T> for OrderedSequence<T> {
    /// Returns the last element, the one [`Stack::pop`] would remove.
    #[inline]
    fn peek(&self) -> Option<&T> {
        self.elements.last()
    }
}

impl<T> Stack<T> for OrderedSequence<T> {
    fn push(&mut self, element: T) {
        self.elements.push(element);
    }

    fn pop(&mut self) -> Option<T> {
        self.elements.pop()
    }
}

impl<T> IndexRanger<T> for OrderedSequence<T> {
    fn range_with_index<F>(&self, mut function: F)
    where
        F: FnMut(usize, &T) -> bool,
    {
        for (index, element) in self.elements.iter().enumerate() {
            if !function(index, element) {
                break;
            }
        }
    }
}

impl<T: Clone> Slicer<T> for OrderedSequence<T> {
    fn to_sequence(&self) -> Self {
        self.clone()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for OrderedSequence<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for OrderedSequence<T> {
    #[inline]
    fn from(elements: Vec<T>) -> Self {
        Self { elements }
    }
}

impl<T, const N: usize> From<[T; N]> for OrderedSequence<T> {
    fn from(elements: [T; N]) -> Self {
        Self {
            elements: Vec::from(elements),
        }
    }
}

impl<T> From<OrderedSequence<T>> for Vec<T> {
    #[inline]
    fn from(sequence: OrderedSequence<T>) -> Self {
        sequence.elements
    }
}

impl<T> AsRef<[T]> for OrderedSequence<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.elements
    }
}

impl<T> FromIterator<T> for OrderedSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for OrderedSequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<T> IntoIterator for OrderedSequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a OrderedSequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut OrderedSequence<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter_mut()
    }
}

/// Positional access.
///
/// # Panics
///
/// Panics if `index >= len`. Use [`OrderedSequence::get`] for a checked lookup.
impl<T> Index<usize> for OrderedSequence<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.elements[index]
    }
}

impl<T> IndexMut<usize> for OrderedSequence<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.elements[index]
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedSequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.elements.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for OrderedSequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in &self.elements {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

#[cfg(feature = "typeclass")]
impl<T> TypeConstructor for OrderedSequence<T> {
    type Inner = T;
    type WithType<B> = OrderedSequence<B>;
}

#[cfg(feature = "typeclass")]
impl<T> Functor for OrderedSequence<T> {
    fn fmap<B, F>(self, function: F) -> OrderedSequence<B>
    where
        F: FnMut(T) -> B,
    {
        OrderedSequence {
            elements: self.elements.into_iter().map(function).collect(),
        }
    }

    fn fmap_ref<B, F>(&self, function: F) -> OrderedSequence<B>
    where
        F: FnMut(&T) -> B,
    {
        self.map(function)
    }
}

#[cfg(feature = "typeclass")]
impl<T> Foldable for OrderedSequence<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.elements.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.elements
            .into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn length(&self) -> usize {
        self.elements.len()
    }
}

#[cfg(feature = "typeclass")]
impl<T> Semigroup for OrderedSequence<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.elements.append(&mut other.elements);
        self
    }
}

#[cfg(feature = "typeclass")]
impl<T> Monoid for OrderedSequence<T> {
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================

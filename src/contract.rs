//! Container contracts.
//!
//! This module provides the small, single-purpose traits that describe the
//! abstract data structures of the crate:
//!
//! - [`Container`]: Size inspection and clearing, shared by every structure
//! - [`Peeker`]: Read access to the next element without removing it
//! - [`Stack`]: Last-in-first-out push/pop
//! - [`Queue`]: First-in-first-out push/pop
//! - [`PriorityQueue`]: Push, then pop the highest-priority element
//! - [`MonotoneQueue`]: A priority queue whose extracted priorities form a monotonic sequence
//! - [`Set`], [`Map`]: Membership and key/value association
//! - [`Tree`]: Hierarchical containers with a height
//! - [`Comparer`]: Three-way comparison used by ordered containers
//! - [`IndexRanger`]: Early-exit traversal with element positions
//! - [`Slicer`]: Conversion of any container into an [`OrderedSequence`]
//!
//! The standard library collections implement the contracts that fit them,
//! so generic code written against the contracts works with both the crate's
//! structures and the standard ones.
//!
//! # Examples
//!
//! ```rust
//! use slicewise::contract::{Container, Stack};
//! use slicewise::OrderedSequence;
//!
//! fn drain_all<S: Stack<i32>>(stack: &mut S) -> Vec<i32> {
//!     let mut drained = Vec::new();
//!     while let Some(element) = stack.pop() {
//!         drained.push(element);
//!     }
//!     drained
//! }
//!
//! let mut sequence: OrderedSequence<i32> = (1..=3).collect();
//! assert_eq!(drain_all(&mut sequence), vec![3, 2, 1]);
//! assert!(Container::is_empty(&sequence));
//! ```

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};

use crate::sequence::OrderedSequence;

// =============================================================================
// Core Contracts
// =============================================================================

/// The basic contract every data structure implements.
pub trait Container {
    /// Returns `true` if the container holds no elements.
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the container.
    fn len(&self) -> usize;

    /// Removes every element; the container is empty afterwards.
    fn clear(&mut self);
}

/// Gives access to the next element without modifying the container.
pub trait Peeker<T> {
    /// Inspects the element that the next removal would return.
    ///
    /// Returns `None` if the container is empty.
    fn peek(&self) -> Option<&T>;
}

/// A last-in-first-out data structure.
pub trait Stack<T>: Container + Peeker<T> {
    /// Adds an element to the top of the stack.
    fn push(&mut self, element: T);

    /// Removes and returns the most recently added element.
    fn pop(&mut self) -> Option<T>;
}

/// A first-in-first-out data structure.
pub trait Queue<T>: Container + Peeker<T> {
    /// Appends an element to the end of the queue.
    fn push(&mut self, element: T);

    /// Removes and returns the element at the start of the queue.
    fn pop(&mut self) -> Option<T>;
}

/// A queue in which every element has a priority; the element with the
/// highest priority is served first.
pub trait PriorityQueue<T>: Container + Peeker<T> {
    /// Adds an element to the queue.
    fn push(&mut self, element: T);

    /// Removes and returns the highest-priority element.
    fn pop(&mut self) -> Option<T>;
}

/// A priority queue whose extracted priorities form a monotonic sequence.
///
/// For a minimum queue the extracted minimum never decreases; for a maximum
/// queue the extracted maximum never increases. Pushing an element evicts
/// every queued element it makes permanently inferior.
pub trait MonotoneQueue<T>: Container + Peeker<T> {
    /// Appends an element, evicting inferior elements from the back.
    fn push(&mut self, element: T);

    /// Removes and returns the element at the front.
    fn pop(&mut self) -> Option<T>;
}

/// A collection of unique values without any particular order.
pub trait Set<T>: Container {
    /// Adds the element if it is not present already.
    fn add(&mut self, element: T) -> &mut Self;

    /// Checks whether the element is in the set.
    fn has(&self, element: &T) -> bool;

    /// Removes the element if it is present.
    fn delete(&mut self, element: &T);
}

/// A collection of `(key, value)` pairs in which each key appears at most once.
pub trait Map<K, V>: Container {
    /// Binds `key` to `value`, replacing any previous binding.
    fn add(&mut self, key: K, value: V) -> &mut Self;

    /// Finds the value bound to `key`.
    fn get(&self, key: &K) -> Option<&V>;

    /// Checks whether `key` is bound.
    fn has(&self, key: &K) -> bool;

    /// Removes the binding for `key`, if any.
    fn delete(&mut self, key: &K);
}

/// A hierarchical structure with a root and subtrees.
pub trait Tree: Container {
    /// Returns the length of the longest downward path from the root to a leaf.
    fn height(&self) -> usize;
}

/// A three-way comparison between values of the same type.
///
/// Every [`Ord`] type is a `Comparer`, so natural-order operations such as
/// [`OrderedSequence::sort_by_comparer`] and
/// [`MonotonicWindowQueue::minimum`](crate::MonotonicWindowQueue::minimum)
/// work out of the box for integers, strings and tuples.
///
/// # Examples
///
/// ```rust
/// use slicewise::contract::Comparer;
/// use std::cmp::Ordering;
///
/// assert_eq!(1.compare(&2), Ordering::Less);
/// assert_eq!("b".compare(&"a"), Ordering::Greater);
/// ```
pub trait Comparer {
    /// Compares `self` to `other`.
    fn compare(&self, other: &Self) -> Ordering;
}

impl<T: Ord + ?Sized> Comparer for T {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

/// Traversal with element positions that can stop early.
pub trait IndexRanger<T> {
    /// Calls `function` with each `(index, element)` pair in order, stopping
    /// as soon as it returns `false`.
    fn range_with_index<F>(&self, function: F)
    where
        F: FnMut(usize, &T) -> bool;
}

/// Conversion of a container's elements into an [`OrderedSequence`].
pub trait Slicer<T> {
    /// Returns a newly-owned sequence holding the elements in traversal order.
    fn to_sequence(&self) -> OrderedSequence<T>;
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl<T> Container for Vec<T> {
    #[inline]
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn clear(&mut self) {
        Self::clear(self);
    }
}

impl<T> Peeker<T> for Vec<T> {
    #[inline]
    fn peek(&self) -> Option<&T> {
        self.last()
    }
}

impl<T> Stack<T> for Vec<T> {
    fn push(&mut self, element: T) {
        Self::push(self, element);
    }

    fn pop(&mut self) -> Option<T> {
        Self::pop(self)
    }
}

impl<T> IndexRanger<T> for Vec<T> {
    fn range_with_index<F>(&self, mut function: F)
    where
        F: FnMut(usize, &T) -> bool,
    {
        for (index, element) in self.iter().enumerate() {
            if !function(index, element) {
                break;
            }
        }
    }
}

impl<T: Clone> Slicer<T> for Vec<T> {
    fn to_sequence(&self) -> OrderedSequence<T> {
        OrderedSequence::from(self.clone())
    }
}

impl<T> Container for VecDeque<T> {
    #[inline]
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn clear(&mut self) {
        Self::clear(self);
    }
}

impl<T> Peeker<T> for VecDeque<T> {
    #[inline]
    fn peek(&self) -> Option<&T> {
        self.front()
    }
}

impl<T> Queue<T> for VecDeque<T> {
    fn push(&mut self, element: T) {
        self.push_back(element);
    }

    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
}

impl<T: Clone> Slicer<T> for VecDeque<T> {
    fn to_sequence(&self) -> OrderedSequence<T> {
        self.iter().cloned().collect()
    }
}

impl<T: Ord> Container for BinaryHeap<T> {
    #[inline]
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn clear(&mut self) {
        Self::clear(self);
    }
}

impl<T: Ord> Peeker<T> for BinaryHeap<T> {
    #[inline]
    fn peek(&self) -> Option<&T> {
        Self::peek(self)
    }
}

impl<T: Ord> PriorityQueue<T> for BinaryHeap<T> {
    fn push(&mut self, element: T) {
        Self::push(self, element);
    }

    fn pop(&mut self) -> Option<T> {
        Self::pop(self)
    }
}

impl<T, S> Container for HashSet<T, S> {
    #[inline]
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn clear(&mut self) {
        Self::clear(self);
    }
}

impl<T: Eq + Hash, S: BuildHasher> Set<T> for HashSet<T, S> {
    fn add(&mut self, element: T) -> &mut Self {
        self.insert(element);
        self
    }

    fn has(&self, element: &T) -> bool {
        self.contains(element)
    }

    fn delete(&mut self, element: &T) {
        self.remove(element);
    }
}

impl<T> Container for BTreeSet<T> {
    #[inline]
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn clear(&mut self) {
        Self::clear(self);
    }
}

impl<T: Ord> Set<T> for BTreeSet<T> {
    fn add(&mut self, element: T) -> &mut Self {
        self.insert(element);
        self
    }

    fn has(&self, element: &T) -> bool {
        self.contains(element)
    }

    fn delete(&mut self, element: &T) {
        self.remove(element);
    }
}

impl<K, V, S> Container for HashMap<K, V, S> {
    #[inline]
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn clear(&mut self) {
        Self::clear(self);
    }
}

impl<K: Eq + Hash, V, S: BuildHasher> Map<K, V> for HashMap<K, V, S> {
    fn add(&mut self, key: K, value: V) -> &mut Self {
        self.insert(key, value);
        self
    }

    fn get(&self, key: &K) -> Option<&V> {
        Self::get(self, key)
    }

    fn has(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn delete(&mut self, key: &K) {
        self.remove(key);
    }
}

impl<K, V> Container for BTreeMap<K, V> {
    #[inline]
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn clear(&mut self) {
        Self::clear(self);
    }
}

impl<K: Ord, V> Map<K, V> for BTreeMap<K, V> {
    fn add(&mut self, key: K, value: V) -> &mut Self {
        self.insert(key, value);
        self
    }

    fn get(&self, key: &K) -> Option<&V> {
        Self::get(self, key)
    }

    fn has(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn delete(&mut self, key: &K) {
        self.remove(key);
    }
}

// =============================================================================
// Tests
// =============================================================================

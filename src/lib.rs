//! # slicewise
//!
//! Generic in-memory containers with a functional-transformation API.
//!
//! ## Overview
//!
//! - **[`OrderedSequence`](sequence::OrderedSequence)**: a resizable, indexable
//!   sequence with in-place structural edits (`append`, `prepend`, `splice`,
//!   `sort`, ...) and whole-sequence transforms (`map`, `filter`, `reduce`, ...).
//! - **[`MonotonicWindowQueue`](monotone::MonotonicWindowQueue)**: a deque that
//!   stays monotonic under a caller-supplied ordering, the building block of
//!   sliding-window minimum/maximum.
//! - **Contracts**: small traits (`Container`, `Peeker`, `Stack`, `Comparer`, ...)
//!   the structures implement or consume.
//! - **Type Classes**: `Functor`, `Foldable`, `Semigroup` and `Monoid`
//!   instances for `OrderedSequence`.
//!
//! ## Feature Flags
//!
//! - `typeclass` (default): Type class traits and their implementations
//! - `tracing`: Emit `tracing` events for structural edits and queue evictions
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use slicewise::prelude::*;
//!
//! let mut sequence: OrderedSequence<i32> = (1..=5).collect();
//! let removed = sequence.splice(1, 2, [9, 9]);
//!
//! assert_eq!(sequence.raw(), &[1, 9, 9, 4, 5]);
//! assert_eq!(removed.raw(), &[2, 3]);
//!
//! let mut queue = MonotonicWindowQueue::minimum();
//! for value in [5, 3, 4, 2] {
//!     queue.push(value);
//! }
//! assert_eq!(queue.peek(), Some(&2));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Emits a `tracing` event at TRACE level when the `tracing` feature is
/// enabled, and expands to nothing otherwise.
macro_rules! trace_event {
    ($($argument:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!($($argument)*);
        }
    };
}

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use slicewise::prelude::*;
/// ```
pub mod prelude {
    pub use crate::contract::*;
    pub use crate::error::*;
    pub use crate::monotone::*;
    pub use crate::sequence::*;
    pub use crate::window::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

pub mod contract;
pub mod error;
pub mod monotone;
pub mod sequence;
pub mod window;

#[cfg(feature = "typeclass")]
pub mod typeclass;

pub use error::IndexOutOfBoundsError;
pub use monotone::{Direction, MonotonicWindowQueue};
pub use sequence::OrderedSequence;

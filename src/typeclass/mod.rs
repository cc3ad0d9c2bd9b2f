//! Algebraic views of [`OrderedSequence`](crate::OrderedSequence).
//!
//! - [`Functor`]: `fmap` / `fmap_ref`, element-wise mapping
//! - [`Foldable`]: `fold_left` / `fold_right`, consuming folds
//! - [`Semigroup`]: `combine`, which is concatenation
//! - [`Monoid`]: `empty`, the empty sequence
//!
//! [`TypeConstructor`] carries the element type through a Generic
//! Associated Type so `fmap` can return `OrderedSequence<B>`.
//!
//! # Examples
//!
//! ```rust
//! use slicewise::typeclass::{Foldable, Functor, Monoid, Semigroup};
//! use slicewise::OrderedSequence;
//!
//! let sequence: OrderedSequence<i32> = (1..=3).collect();
//! let doubled = sequence.fmap(|element| element * 2);
//! assert_eq!(doubled.raw(), &[2, 4, 6]);
//!
//! let combined = doubled.combine(OrderedSequence::empty());
//! assert_eq!(combined.fold_left(0, |accumulator, element| accumulator + element), 12);
//! ```

mod foldable;
mod functor;
mod higher;
mod monoid;
mod semigroup;

pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monoid::Monoid;
pub use semigroup::Semigroup;

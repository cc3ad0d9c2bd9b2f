//! Error types for the containers.
//!
//! Most operations never fail: absence is reported with `Option` and
//! out-of-range structural arguments are clamped. The only operations that
//! report an error are the ones addressing a single existing slot, where a
//! clamped index would silently touch the wrong element.

/// Represents an access to a slot that does not exist.
///
/// Returned by [`OrderedSequence::set`](crate::OrderedSequence::set) and
/// [`OrderedSequence::swap`](crate::OrderedSequence::swap).
///
/// # Examples
///
/// ```rust
/// use slicewise::IndexOutOfBoundsError;
///
/// let error = IndexOutOfBoundsError {
///     index: 7,
///     length: 3,
/// };
/// assert_eq!(
///     format!("{}", error),
///     "index 7 is out of bounds for a sequence of length 3"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexOutOfBoundsError {
    /// The index that was requested.
    pub index: usize,
    /// The length of the sequence at the time of the request.
    pub length: usize,
}

impl std::fmt::Display for IndexOutOfBoundsError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "index {} is out of bounds for a sequence of length {}",
            self.index, self.length
        )
    }
}

impl std::error::Error for IndexOutOfBoundsError {}

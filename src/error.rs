//! Error types for building frozen sets.
//!
//! Only construction can fail. Lookups report absence through their return
//! value (`0`, `None`, or the end position) and never produce an error.

/// Represents a rejected construction input.
///
/// Array-based constructors cannot fail: the array length is part of the
/// type. These errors come from the fallible constructors that accept a
/// runtime sequence (`TryFrom<&[K]>`, `TryFrom<Vec<K>>`, `try_from_iter`) or
/// pre-sorted storage (`from_sorted`).
///
/// # Examples
///
/// ```rust
/// use frozen_set::{FrozenSet, FrozenSetError};
///
/// let result = FrozenSet::<i32, 3>::try_from(&[1, 2][..]);
/// assert_eq!(
///     result.unwrap_err(),
///     FrozenSetError::LengthMismatch { expected: 3, actual: 2 }
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrozenSetError {
    /// The input sequence length differs from the declared set size.
    LengthMismatch {
        /// The size declared by the set type.
        expected: usize,
        /// The number of keys supplied. Iterator input is read only up to
        /// `expected + 1` keys, so for overlong iterators this is a lower bound.
        actual: usize,
    },
    /// Pre-sorted input has a key ordered before its predecessor.
    Unsorted {
        /// Position of the first out-of-order key.
        index: usize,
    },
}

impl std::fmt::Display for FrozenSetError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LengthMismatch { expected, actual } => write!(
                formatter,
                "inconsistent key sequence length: expected {expected}, found {actual}"
            ),
            Self::Unsorted { index } => write!(
                formatter,
                "key at index {index} is ordered before its predecessor"
            ),
        }
    }
}

impl std::error::Error for FrozenSetError {}

/// Logs a rejected input before handing the error back to the caller.
#[inline]
pub(crate) fn rejected<K>(error: FrozenSetError) -> FrozenSetError {
    #[cfg(feature = "tracing")]
    tracing::debug!(
        key_type = std::any::type_name::<K>(),
        error = %error,
        "frozen set construction rejected"
    );
    error
}

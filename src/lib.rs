//! # frozen-set
//!
//! An immutable, fixed-capacity, ordered set whose keys are sorted exactly
//! once, when the set is built, and are read-only afterwards.
//!
//! ## Overview
//!
//! A [`FrozenSet<K, N, C>`](set::FrozenSet) stores `N` keys inline in a
//! `[K; N]` array. Construction sorts the array with a comparator `C`; every
//! query after that is a binary search over the sorted array. There is no
//! allocation, no hashing, and no mutating operation on the public type.
//!
//! Sets that are statically known to be empty use
//! [`EmptyFrozenSet<K, C>`](set::EmptyFrozenSet), which holds only the
//! comparator and answers every lookup without touching any storage. Both
//! types implement [`OrderedLookup`](set::OrderedLookup), so generic code can
//! accept either.
//!
//! - **Sets**: [`FrozenSet`](set::FrozenSet), [`EmptyFrozenSet`](set::EmptyFrozenSet), [`make_set`](set::make_set)
//! - **Comparators**: [`Compare`](compare::Compare), [`Less`](compare::Less), [`Greater`](compare::Greater), closures
//! - **Errors**: [`FrozenSetError`](error::FrozenSetError)
//! - **Macros**: [`frozen_set!`], [`frozen_static!`]
//!
//! ## Feature Flags
//!
//! - `macros` (default): the `frozen_set!` and `frozen_static!` macros
//! - `serde`: `Serialize` / `Deserialize` for both set types
//! - `tracing`: structured events on construction and rejected input
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use frozen_set::prelude::*;
//!
//! let set = make_set([5, 1, 3]);
//! assert_eq!(set.as_slice(), &[1, 3, 5]);
//! assert_eq!(set.count(&3), 1);
//! assert_eq!(set.count(&4), 0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the set types, the comparator trait and its stock
/// implementations, and the error type.
///
/// # Usage
///
/// ```rust
/// use frozen_set::prelude::*;
/// ```
pub mod prelude {
    pub use crate::compare::*;
    pub use crate::error::*;
    pub use crate::set::*;
}

mod algorithms;
pub mod compare;
pub mod error;
pub mod set;

#[cfg(feature = "macros")]
mod macros;

pub use compare::{Compare, Greater, Less};
pub use error::FrozenSetError;
pub use set::{EmptyFrozenSet, FrozenSet, OrderedLookup, make_set};

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn prelude_exposes_both_set_types() {
        let set = make_set([2, 1]);
        let empty: EmptyFrozenSet<i32> = EmptyFrozenSet::new();
        assert_eq!(set.len(), 2);
        assert!(empty.is_empty());
    }
}

//! Immutable, fixed-capacity ordered sets.
//!
//! This module provides two set types with the same operation set:
//!
//! - [`FrozenSet`]: `N` keys stored inline and sorted at construction
//! - [`EmptyFrozenSet`]: a set statically known to hold no keys
//!
//! The choice between them is made by the caller's declared size, never by a
//! runtime check. Generic code can accept either through [`OrderedLookup`].
//!
//! # Immutability
//!
//! Neither type has a mutating operation. A set built during start-up can be
//! shared as `&'static` (see [`frozen_static!`](crate::frozen_static)) and
//! queried from any number of threads.
//!
//! # Examples
//!
//! ## `FrozenSet`
//!
//! ```rust
//! use frozen_set::set::make_set;
//!
//! let set = make_set(["b", "a"]);
//! assert_eq!(set.find_index(&"a"), 0);
//! assert_eq!(set.upper_bound(&"a"), 1);
//! assert_eq!(set.upper_bound(&"z"), set.end());
//! ```
//!
//! ## `EmptyFrozenSet`
//!
//! ```rust
//! use frozen_set::set::EmptyFrozenSet;
//!
//! let set: EmptyFrozenSet<u64> = EmptyFrozenSet::new();
//! assert_eq!(set.len(), 0);
//! assert_eq!(set.count(&42), 0);
//! assert_eq!(set.begin(), set.end());
//! ```

mod empty_set;
mod frozen_set;
mod lookup;

pub use empty_set::EmptyFrozenSet;
pub use frozen_set::FrozenSet;
pub use lookup::OrderedLookup;

use crate::compare::{Greater, Less};

/// Creates a [`FrozenSet`] from an array, deducing `N` from its length.
///
/// Keys are sorted in their natural ascending order.
///
/// # Examples
///
/// ```rust
/// use frozen_set::make_set;
///
/// let set = make_set([5, 1, 3]);
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.as_slice(), &[1, 3, 5]);
/// ```
#[inline]
#[must_use]
pub fn make_set<K: Ord, const N: usize>(keys: [K; N]) -> FrozenSet<K, N> {
    FrozenSet::new(keys)
}

#[inline]
pub(crate) fn constructed<K>(len: usize) {
    #[cfg(feature = "tracing")]
    tracing::trace!(
        len,
        key_type = std::any::type_name::<K>(),
        "frozen set constructed"
    );
    #[cfg(not(feature = "tracing"))]
    let _ = len;
}

static_assertions::assert_impl_all!(FrozenSet<u32, 4>: Send, Sync, Copy);
static_assertions::assert_impl_all!(FrozenSet<&'static str, 2, Greater>: Send, Sync);
static_assertions::assert_impl_all!(EmptyFrozenSet<String, Less>: Send, Sync, Copy);
static_assertions::assert_not_impl_any!(FrozenSet<std::rc::Rc<u32>, 1>: Send, Sync);

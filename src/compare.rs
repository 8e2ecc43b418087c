//! Comparators used to order and search a frozen set.
//!
//! A comparator is a strict weak ordering expressed as a single "less than"
//! predicate. The same comparator instance that sorted a set answers every
//! later query against it; a set never re-sorts.
//!
//! Three kinds of comparator are supported:
//!
//! - [`Less`]: the natural ascending order of `K: Ord` (the default)
//! - [`Greater`]: the natural order reversed
//! - any closure `Fn(&K, &K) -> bool`
//!
//! # Examples
//!
//! ```rust
//! use frozen_set::compare::{Compare, Greater, Less};
//!
//! assert!(Less.less(&1, &2));
//! assert!(Greater.less(&2, &1));
//!
//! let by_length = |left: &&str, right: &&str| left.len() < right.len();
//! assert!(by_length.less(&"ab", &"abc"));
//! assert!(by_length.equivalent(&"ab", &"cd"));
//! ```

use std::cmp::Ordering;

/// A strict weak ordering over `K`.
///
/// Implementations must be irreflexive (`less(a, a)` is false) and
/// transitive, and equivalence (neither key less than the other) must be
/// transitive. A comparator that breaks these rules is not detected; the sets
/// built with it have unspecified ordering and lookup results, and sorting
/// may panic.
pub trait Compare<K: ?Sized> {
    /// Returns `true` if `left` is ordered strictly before `right`.
    fn less(&self, left: &K, right: &K) -> bool;

    /// Returns `true` if neither key is ordered before the other.
    #[inline]
    fn equivalent(&self, left: &K, right: &K) -> bool {
        !self.less(left, right) && !self.less(right, left)
    }

    /// Returns the [`Ordering`] of `left` relative to `right`.
    #[inline]
    fn ordering(&self, left: &K, right: &K) -> Ordering {
        if self.less(left, right) {
            Ordering::Less
        } else if self.less(right, left) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// Natural ascending order (`left < right`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Less;

impl<K: Ord + ?Sized> Compare<K> for Less {
    #[inline]
    fn less(&self, left: &K, right: &K) -> bool {
        left < right
    }

    #[inline]
    fn ordering(&self, left: &K, right: &K) -> Ordering {
        left.cmp(right)
    }
}

/// Natural descending order (`left > right`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Greater;

impl<K: Ord + ?Sized> Compare<K> for Greater {
    #[inline]
    fn less(&self, left: &K, right: &K) -> bool {
        left > right
    }

    #[inline]
    fn ordering(&self, left: &K, right: &K) -> Ordering {
        right.cmp(left)
    }
}

impl<K: ?Sized, F> Compare<K> for F
where
    F: Fn(&K, &K) -> bool,
{
    #[inline]
    fn less(&self, left: &K, right: &K) -> bool {
        self(left, right)
    }
}

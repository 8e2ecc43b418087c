//! The operation set shared by [`FrozenSet`](super::FrozenSet) and
//! [`EmptyFrozenSet`](super::EmptyFrozenSet).

use std::ops::Range;

use crate::compare::Compare;

/// Read-only ordered lookups over a frozen key set.
///
/// Positions are indices into the sorted storage. The end position is
/// [`len`](Self::len); it is returned by every lookup that finds no match.
///
/// # Narrowed bounds
///
/// [`lower_bound`](Self::lower_bound) and [`upper_bound`](Self::upper_bound)
/// only answer for keys that are present. For a key that is absent they
/// return the end position, not the insertion point a sorted container would
/// usually report.
///
/// # Examples
///
/// ```rust
/// use frozen_set::{EmptyFrozenSet, OrderedLookup, make_set};
///
/// fn describe<S: OrderedLookup<Key = i32>>(set: &S, key: i32) -> usize {
///     set.count(&key)
/// }
///
/// assert_eq!(describe(&make_set([1, 2, 3]), 2), 1);
/// assert_eq!(describe(&EmptyFrozenSet::<i32>::new(), 2), 0);
/// ```
pub trait OrderedLookup {
    /// The key type stored in the set.
    type Key;

    /// The comparator used to sort the set and answer queries.
    type Comparator: Compare<Self::Key>;

    /// Returns the sorted keys.
    fn as_slice(&self) -> &[Self::Key];

    /// Returns the comparator the set was sorted with.
    fn comparator(&self) -> &Self::Comparator;

    /// Returns `1` if a key equivalent to `key` is present, else `0`.
    fn count(&self, key: &Self::Key) -> usize;

    /// Returns the position of a key equivalent to `key`, or the end position.
    fn find_index(&self, key: &Self::Key) -> usize;

    /// Returns the position of a key equivalent to `key`, or the end position.
    fn lower_bound(&self, key: &Self::Key) -> usize;

    /// Returns the position after a key equivalent to `key`, or the end
    /// position.
    fn upper_bound(&self, key: &Self::Key) -> usize;

    /// Returns the number of keys.
    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns the fixed capacity, which always equals [`len`](Self::len).
    #[inline]
    fn max_size(&self) -> usize {
        self.len()
    }

    /// Returns `true` if the set holds no keys.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the first position, `0`.
    #[inline]
    fn begin(&self) -> usize {
        0
    }

    /// Returns the end position, one past the last key.
    #[inline]
    fn end(&self) -> usize {
        self.len()
    }

    /// Returns `true` if a key equivalent to `key` is present.
    #[inline]
    fn contains(&self, key: &Self::Key) -> bool {
        self.count(key) != 0
    }

    /// Returns a reference to a key equivalent to `key`.
    #[inline]
    fn find(&self, key: &Self::Key) -> Option<&Self::Key> {
        self.as_slice().get(self.find_index(key))
    }

    /// Returns the range holding a key equivalent to `key`.
    ///
    /// The range is at most one key wide, even when the set was built from
    /// duplicate keys. It is `end..end` when no key matches.
    #[inline]
    fn equal_range(&self, key: &Self::Key) -> Range<usize> {
        let lower = self.lower_bound(key);
        if lower == self.end() {
            lower..lower
        } else {
            lower..lower + 1
        }
    }

    /// Returns a copy of the comparator.
    #[inline]
    fn key_comp(&self) -> Self::Comparator
    where
        Self::Comparator: Clone,
    {
        self.comparator().clone()
    }

    /// Returns a copy of the comparator. Keys and values are the same in a
    /// set, so this is [`key_comp`](Self::key_comp).
    #[inline]
    fn value_comp(&self) -> Self::Comparator
    where
        Self::Comparator: Clone,
    {
        self.key_comp()
    }

    /// Returns `true` if every key of `self` is found in `other`.
    ///
    /// Each key is looked up with `other`'s comparator.
    fn is_subset<O>(&self, other: &O) -> bool
    where
        O: OrderedLookup<Key = Self::Key> + ?Sized,
    {
        self.as_slice().iter().all(|key| other.contains(key))
    }

    /// Returns `true` if no key of `self` is found in `other`.
    ///
    /// Each key is looked up with `other`'s comparator.
    fn is_disjoint<O>(&self, other: &O) -> bool
    where
        O: OrderedLookup<Key = Self::Key> + ?Sized,
    {
        !self.as_slice().iter().any(|key| other.contains(key))
    }
}

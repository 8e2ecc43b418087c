//! Sorting and binary-search primitives over fixed-size key storage.
//!
//! Every function takes the comparator explicitly so that the set can pass
//! the very instance it was sorted with.

use crate::compare::Compare;

/// Sorts `keys` in place so that no element is ordered before its predecessor.
///
/// The sort is unstable: the relative order of equivalent keys is unspecified.
/// It never allocates and never adds or removes elements.
#[inline]
pub(crate) fn sort_by_compare<K, C>(keys: &mut [K], compare: &C)
where
    C: Compare<K> + ?Sized,
{
    keys.sort_unstable_by(|left, right| compare.ordering(left, right));
}

/// Returns the index of the first key that is not ordered before `key`,
/// or `keys.len()` if every key is.
#[inline]
pub(crate) fn lower_bound<K, C>(keys: &[K], key: &K, compare: &C) -> usize
where
    C: Compare<K> + ?Sized,
{
    keys.partition_point(|element| compare.less(element, key))
}

/// Returns the index of a key equivalent to `key`, if any.
///
/// The candidate is the lower bound; it matches when `key` is not ordered
/// before it. With duplicate keys this is the first of them.
#[inline]
pub(crate) fn exact_match<K, C>(keys: &[K], key: &K, compare: &C) -> Option<usize>
where
    C: Compare<K> + ?Sized,
{
    let position = lower_bound(keys, key, compare);
    keys.get(position)
        .filter(|&element| !compare.less(key, element))
        .map(|_| position)
}

/// Returns `true` if `keys` contains a key equivalent to `key`.
#[inline]
pub(crate) fn binary_search<K, C>(keys: &[K], key: &K, compare: &C) -> bool
where
    C: Compare<K> + ?Sized,
{
    exact_match(keys, key, compare).is_some()
}

/// Returns the index of the first key ordered before its predecessor.
///
/// `None` means `keys` is sorted in non-descending order.
pub(crate) fn first_unsorted<K, C>(keys: &[K], compare: &C) -> Option<usize>
where
    C: Compare<K> + ?Sized,
{
    keys.windows(2)
        .position(|window| compare.less(&window[1], &window[0]))
        .map(|position| position + 1)
}

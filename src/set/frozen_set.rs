//! A fixed-size ordered set sorted once at construction.
//!
//! This module provides [`FrozenSet`], an immutable set of exactly `N` keys
//! stored inline in a `[K; N]` array.
//!
//! # Overview
//!
//! Construction copies the comparator into the set and sorts the array with
//! it. From then on the set exposes only read-only views, so the array stays
//! sorted for the lifetime of the value and any number of threads can query
//! it without synchronisation.
//!
//! # Time Complexity
//!
//! | Operation                              | Complexity  |
//! |----------------------------------------|-------------|
//! | `with_compare` / `new`                 | O(N log N)  |
//! | `from_sorted`                          | O(N)        |
//! | `count` / `contains` / `find`          | O(log N)    |
//! | `lower_bound` / `upper_bound`          | O(log N)    |
//! | `equal_range`                          | O(log N)    |
//! | `len` / `is_empty` / `max_size`        | O(1)        |
//! | `iter` / `iter_rev`                    | O(1) + O(N) |
//!
//! # Duplicate keys
//!
//! Duplicates are neither rejected nor merged: equivalent keys end up next to
//! each other after sorting. Lookups stop at the first match, so `count`
//! still returns `1` and `equal_range` covers a single key. Build sets from
//! duplicate-free input when those answers matter.
//!
//! # Examples
//!
//! ```rust
//! use frozen_set::FrozenSet;
//!
//! let set = FrozenSet::new([5, 1, 3]);
//!
//! let sorted: Vec<i32> = set.iter().copied().collect();
//! assert_eq!(sorted, vec![1, 3, 5]);
//! assert_eq!(set.count(&3), 1);
//! assert_eq!(set.count(&4), 0);
//!
//! // Bounds only answer for keys that are present.
//! assert_eq!(set.lower_bound(&3), 1);
//! assert_eq!(set.upper_bound(&3), 2);
//! assert_eq!(set.lower_bound(&4), set.end());
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Index, Range};

use arrayvec::ArrayVec;

use super::lookup::OrderedLookup;
use crate::algorithms;
use crate::compare::{Compare, Less};
use crate::error::{FrozenSetError, rejected};

/// An immutable ordered set of exactly `N` keys.
///
/// # Type Parameters
///
/// * `K` - The key type. It is only ever compared through `C`.
/// * `N` - The number of keys, fixed by the type.
/// * `C` - The comparator, [`Less`] by default.
///
/// # Examples
///
/// ```rust
/// use frozen_set::{FrozenSet, Greater};
///
/// let descending = FrozenSet::with_compare([1, 2, 3], Greater);
/// assert_eq!(descending.as_slice(), &[3, 2, 1]);
/// assert!(descending.contains(&2));
/// ```
///
/// The number of keys is part of the type, so a key list of the wrong length
/// is rejected by the compiler:
///
/// ```compile_fail
/// use frozen_set::FrozenSet;
///
/// let set: FrozenSet<i32, 3> = FrozenSet::new([1, 2]);
/// ```
#[derive(Clone, Copy)]
pub struct FrozenSet<K, const N: usize, C = Less> {
    compare: C,
    keys: [K; N],
}

impl<K: Ord, const N: usize> FrozenSet<K, N> {
    /// Creates a set from `keys` in their natural ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frozen_set::FrozenSet;
    ///
    /// let set = FrozenSet::new(["b", "a"]);
    /// assert_eq!(set.as_slice(), &["a", "b"]);
    /// ```
    #[must_use]
    pub fn new(keys: [K; N]) -> Self {
        Self::with_compare(keys, Less)
    }
}

impl<K, const N: usize, C: Compare<K>> FrozenSet<K, N, C> {
    /// Creates a set from `keys`, sorting them with `compare`.
    ///
    /// The comparator is stored in the set and answers every later query.
    /// Equivalent keys are kept; their relative order is unspecified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frozen_set::FrozenSet;
    ///
    /// let by_length = |left: &&str, right: &&str| left.len() < right.len();
    /// let set = FrozenSet::with_compare(["ccc", "a", "bb"], by_length);
    /// assert_eq!(set.as_slice(), &["a", "bb", "ccc"]);
    /// assert!(set.contains(&"zz"));
    /// ```
    #[must_use]
    pub fn with_compare(mut keys: [K; N], compare: C) -> Self {
        algorithms::sort_by_compare(&mut keys, &compare);
        super::constructed::<K>(N);
        Self { compare, keys }
    }

    /// Creates a set from keys that are already sorted by `compare`.
    ///
    /// The order is verified in O(N) instead of sorted.
    ///
    /// # Errors
    ///
    /// Returns [`FrozenSetError::Unsorted`] with the position of the first key
    /// ordered before its predecessor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frozen_set::{FrozenSet, FrozenSetError, Less};
    ///
    /// assert!(FrozenSet::from_sorted([1, 2, 3], Less).is_ok());
    /// assert_eq!(
    ///     FrozenSet::from_sorted([1, 3, 2], Less).unwrap_err(),
    ///     FrozenSetError::Unsorted { index: 2 }
    /// );
    /// ```
    pub fn from_sorted(keys: [K; N], compare: C) -> Result<Self, FrozenSetError> {
        if let Some(index) = algorithms::first_unsorted(&keys, &compare) {
            return Err(rejected::<K>(FrozenSetError::Unsorted { index }));
        }
        super::constructed::<K>(N);
        Ok(Self { compare, keys })
    }

    /// Creates a set from an iterator that must yield exactly `N` keys.
    ///
    /// Keys are buffered inline; no heap allocation takes place.
    ///
    /// # Errors
    ///
    /// Returns [`FrozenSetError::LengthMismatch`] if the iterator yields more
    /// or fewer than `N` keys. Input is read no further than the first key
    /// past `N`, so an overlong or endless iterator reports `actual: N + 1`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frozen_set::{FrozenSet, FrozenSetError, Less};
    ///
    /// let set = FrozenSet::<u8, 3>::try_from_iter((1..=3).rev(), Less).unwrap();
    /// assert_eq!(set.as_slice(), &[1, 2, 3]);
    ///
    /// let error = FrozenSet::<u8, 3>::try_from_iter(1..=5, Less).unwrap_err();
    /// assert_eq!(error, FrozenSetError::LengthMismatch { expected: 3, actual: 4 });
    /// ```
    pub fn try_from_iter<I>(keys: I, compare: C) -> Result<Self, FrozenSetError>
    where
        I: IntoIterator<Item = K>,
    {
        let mut buffer = ArrayVec::<K, N>::new();
        for key in keys {
            if buffer.try_push(key).is_err() {
                return Err(rejected::<K>(FrozenSetError::LengthMismatch {
                    expected: N,
                    actual: N + 1,
                }));
            }
        }
        let keys = buffer.into_inner().map_err(|partial| {
            rejected::<K>(FrozenSetError::LengthMismatch {
                expected: N,
                actual: partial.len(),
            })
        })?;
        Ok(Self::with_compare(keys, compare))
    }

    /// Creates a set by cloning the keys of `keys`, which must hold exactly
    /// `N` of them.
    ///
    /// # Errors
    ///
    /// Returns [`FrozenSetError::LengthMismatch`] if `keys.len() != N`.
    pub fn try_from_slice(keys: &[K], compare: C) -> Result<Self, FrozenSetError>
    where
        K: Clone,
    {
        if keys.len() != N {
            return Err(rejected::<K>(FrozenSetError::LengthMismatch {
                expected: N,
                actual: keys.len(),
            }));
        }
        Self::try_from_iter(keys.iter().cloned(), compare)
    }

    /// Returns the number of keys, which is always `N`.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns the fixed capacity, which is always `N`.
    #[inline]
    #[must_use]
    pub const fn max_size(&self) -> usize {
        N
    }

    /// Returns `true` if `N == 0`.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns `1` if a key equivalent to `key` is present, else `0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frozen_set::FrozenSet;
    ///
    /// let set = FrozenSet::new([5, 1, 3]);
    /// assert_eq!(set.count(&3), 1);
    /// assert_eq!(set.count(&4), 0);
    /// ```
    #[inline]
    #[must_use]
    pub fn count(&self, key: &K) -> usize {
        usize::from(algorithms::binary_search(&self.keys, key, &self.compare))
    }

    /// Returns `true` if a key equivalent to `key` is present.
    #[inline]
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        algorithms::binary_search(&self.keys, key, &self.compare)
    }

    /// Returns the stored key equivalent to `key`.
    ///
    /// Equivalence is decided by the comparator, so the returned key may be
    /// a different value than `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frozen_set::FrozenSet;
    ///
    /// let case_insensitive =
    ///     |left: &&str, right: &&str| left.to_lowercase() < right.to_lowercase();
    /// let set = FrozenSet::with_compare(["Beta", "alpha"], case_insensitive);
    /// assert_eq!(set.find(&"BETA"), Some(&"Beta"));
    /// assert_eq!(set.find(&"gamma"), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn find(&self, key: &K) -> Option<&K> {
        algorithms::exact_match(&self.keys, key, &self.compare).map(|position| &self.keys[position])
    }

    /// Returns the position of the key equivalent to `key`, or
    /// [`end`](Self::end).
    #[inline]
    #[must_use]
    pub fn find_index(&self, key: &K) -> usize {
        algorithms::exact_match(&self.keys, key, &self.compare).unwrap_or(N)
    }

    /// Returns the position of the key equivalent to `key`, or
    /// [`end`](Self::end) if there is none.
    ///
    /// This is narrower than the usual "first key not less than" meaning: an
    /// absent key yields `end`, never its insertion point.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frozen_set::FrozenSet;
    ///
    /// let set = FrozenSet::new([10, 20, 30]);
    /// assert_eq!(set.lower_bound(&20), 1);
    /// assert_eq!(set.lower_bound(&15), set.end());
    /// ```
    #[inline]
    #[must_use]
    pub fn lower_bound(&self, key: &K) -> usize {
        self.find_index(key)
    }

    /// Returns the position just after the key equivalent to `key`, or
    /// [`end`](Self::end) if there is none.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frozen_set::FrozenSet;
    ///
    /// let set = FrozenSet::new(["b", "a"]);
    /// assert_eq!(set.upper_bound(&"a"), 1);
    /// assert_eq!(set.upper_bound(&"z"), set.end());
    /// ```
    #[inline]
    #[must_use]
    pub fn upper_bound(&self, key: &K) -> usize {
        algorithms::exact_match(&self.keys, key, &self.compare).map_or(N, |position| position + 1)
    }

    /// Returns `lower_bound(key)..lower_bound(key) + 1` when `key` is present,
    /// and `end..end` otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frozen_set::FrozenSet;
    ///
    /// let set = FrozenSet::new([1, 2, 3]);
    /// assert_eq!(set.equal_range(&2), 1..2);
    /// assert_eq!(set.equal_range(&9), 3..3);
    /// ```
    #[inline]
    #[must_use]
    pub fn equal_range(&self, key: &K) -> Range<usize> {
        algorithms::exact_match(&self.keys, key, &self.compare)
            .map_or(N..N, |position| position..position + 1)
    }

    /// Returns a reference to the stored comparator.
    #[inline]
    #[must_use]
    pub const fn comparator(&self) -> &C {
        &self.compare
    }

    /// Returns a copy of the comparator.
    #[inline]
    #[must_use]
    pub fn key_comp(&self) -> C
    where
        C: Clone,
    {
        self.compare.clone()
    }

    /// Returns a copy of the comparator, which orders values as well as keys.
    #[inline]
    #[must_use]
    pub fn value_comp(&self) -> C
    where
        C: Clone,
    {
        self.compare.clone()
    }
}

impl<K, const N: usize, C> FrozenSet<K, N, C> {
    /// Returns the first position, `0`.
    #[inline]
    #[must_use]
    pub const fn begin(&self) -> usize {
        0
    }

    /// Returns the end position, `N`.
    #[inline]
    #[must_use]
    pub const fn end(&self) -> usize {
        N
    }

    /// Returns the sorted keys.
    #[inline]
    #[must_use]
    pub const fn as_slice(&self) -> &[K] {
        &self.keys
    }

    /// Returns the key at `position`, or `None` at or past the end.
    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&K> {
        self.keys.get(position)
    }

    /// Returns the first key in sorted order.
    #[inline]
    #[must_use]
    pub const fn first(&self) -> Option<&K> {
        self.keys.first()
    }

    /// Returns the last key in sorted order.
    #[inline]
    #[must_use]
    pub const fn last(&self) -> Option<&K> {
        self.keys.last()
    }

    /// Returns an iterator over the keys in sorted order.
    ///
    /// The iterator is double-ended; see [`iter_rev`](Self::iter_rev).
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, K> {
        self.keys.iter()
    }

    /// Returns an iterator over the keys in reverse sorted order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frozen_set::FrozenSet;
    ///
    /// let set = FrozenSet::new([2, 3, 1]);
    /// let reversed: Vec<i32> = set.iter_rev().copied().collect();
    /// assert_eq!(reversed, vec![3, 2, 1]);
    /// ```
    #[inline]
    pub fn iter_rev(&self) -> std::iter::Rev<std::slice::Iter<'_, K>> {
        self.keys.iter().rev()
    }

    /// Consumes the set and returns the sorted keys.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> [K; N] {
        self.keys
    }
}

impl<K, const N: usize, C: Compare<K>> OrderedLookup for FrozenSet<K, N, C> {
    type Key = K;
    type Comparator = C;

    #[inline]
    fn as_slice(&self) -> &[K] {
        &self.keys
    }

    #[inline]
    fn comparator(&self) -> &C {
        &self.compare
    }

    #[inline]
    fn count(&self, key: &K) -> usize {
        Self::count(self, key)
    }

    #[inline]
    fn find_index(&self, key: &K) -> usize {
        Self::find_index(self, key)
    }

    #[inline]
    fn lower_bound(&self, key: &K) -> usize {
        Self::lower_bound(self, key)
    }

    #[inline]
    fn upper_bound(&self, key: &K) -> usize {
        Self::upper_bound(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn contains(&self, key: &K) -> bool {
        Self::contains(self, key)
    }

    #[inline]
    fn find(&self, key: &K) -> Option<&K> {
        Self::find(self, key)
    }

    #[inline]
    fn equal_range(&self, key: &K) -> Range<usize> {
        Self::equal_range(self, key)
    }
}

impl<K, const N: usize, C> AsRef<[K]> for FrozenSet<K, N, C> {
    #[inline]
    fn as_ref(&self) -> &[K] {
        &self.keys
    }
}

impl<K, const N: usize, C> Index<usize> for FrozenSet<K, N, C> {
    type Output = K;

    #[inline]
    fn index(&self, position: usize) -> &K {
        &self.keys[position]
    }
}

impl<K, C: Default> Default for FrozenSet<K, 0, C> {
    #[inline]
    fn default() -> Self {
        Self {
            compare: C::default(),
            keys: [],
        }
    }
}

impl<K, const N: usize, C> From<[K; N]> for FrozenSet<K, N, C>
where
    C: Compare<K> + Default,
{
    #[inline]
    fn from(keys: [K; N]) -> Self {
        Self::with_compare(keys, C::default())
    }
}

impl<K, const N: usize, C> TryFrom<&[K]> for FrozenSet<K, N, C>
where
    K: Clone,
    C: Compare<K> + Default,
{
    type Error = FrozenSetError;

    #[inline]
    fn try_from(keys: &[K]) -> Result<Self, Self::Error> {
        Self::try_from_slice(keys, C::default())
    }
}

impl<K, const N: usize, C> TryFrom<Vec<K>> for FrozenSet<K, N, C>
where
    C: Compare<K> + Default,
{
    type Error = FrozenSetError;

    #[inline]
    fn try_from(keys: Vec<K>) -> Result<Self, Self::Error> {
        if keys.len() != N {
            return Err(rejected::<K>(FrozenSetError::LengthMismatch {
                expected: N,
                actual: keys.len(),
            }));
        }
        Self::try_from_iter(keys, C::default())
    }
}

impl<'a, K, const N: usize, C> IntoIterator for &'a FrozenSet<K, N, C> {
    type Item = &'a K;
    type IntoIter = std::slice::Iter<'a, K>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

impl<K, const N: usize, C> IntoIterator for FrozenSet<K, N, C> {
    type Item = K;
    type IntoIter = std::array::IntoIter<K, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.keys.into_iter()
    }
}

impl<K: fmt::Debug, const N: usize, C> fmt::Debug for FrozenSet<K, N, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.keys.iter()).finish()
    }
}

impl<K: fmt::Display, const N: usize, C> fmt::Display for FrozenSet<K, N, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for key in &self.keys {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}")?;
        }
        write!(formatter, "}}")
    }
}

impl<K: PartialEq, const N: usize, C> PartialEq for FrozenSet<K, N, C> {
    fn eq(&self, other: &Self) -> bool {
        self.keys == other.keys
    }
}

impl<K: Eq, const N: usize, C> Eq for FrozenSet<K, N, C> {}

impl<K: Hash, const N: usize, C> Hash for FrozenSet<K, N, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.keys.hash(state);
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, const N: usize, C> serde::Serialize for FrozenSet<K, N, C>
where
    K: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut sequence = serializer.serialize_seq(Some(N))?;
        for key in &self.keys {
            sequence.serialize_element(key)?;
        }
        sequence.end()
    }
}

#[cfg(feature = "serde")]
struct FrozenSetVisitor<K, const N: usize, C> {
    marker: std::marker::PhantomData<fn() -> (K, C)>,
}

#[cfg(feature = "serde")]
impl<K, const N: usize, C> FrozenSetVisitor<K, N, C> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, K, const N: usize, C> serde::de::Visitor<'de> for FrozenSetVisitor<K, N, C>
where
    K: serde::Deserialize<'de>,
    C: Compare<K> + Default,
{
    type Value = FrozenSet<K, N, C>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a sequence of exactly {N} keys")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut buffer = ArrayVec::<K, N>::new();
        while let Some(key) = access.next_element()? {
            if buffer.try_push(key).is_err() {
                return Err(<A::Error as serde::de::Error>::invalid_length(
                    N + 1,
                    &self,
                ));
            }
        }
        let keys = buffer.into_inner().map_err(|partial| {
            <A::Error as serde::de::Error>::invalid_length(partial.len(), &self)
        })?;
        Ok(FrozenSet::with_compare(keys, C::default()))
    }
}

#[cfg(feature = "serde")]
impl<'de, K, const N: usize, C> serde::Deserialize<'de> for FrozenSet<K, N, C>
where
    K: serde::Deserialize<'de>,
    C: Compare<K> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(FrozenSetVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================

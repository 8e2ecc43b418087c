//! The zero-key specialisation of a frozen set.
//!
//! [`EmptyFrozenSet`] holds only its comparator. There is no key storage to
//! read, so every lookup returns its "not found" answer without comparing
//! anything and every iterator is empty. Results are identical to those of a
//! `FrozenSet<K, 0, C>`.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Index, Range};

use super::lookup::OrderedLookup;
use crate::compare::{Compare, Less};
use crate::error::{FrozenSetError, rejected};

/// A frozen set that is statically known to hold no keys.
///
/// # Examples
///
/// ```rust
/// use frozen_set::EmptyFrozenSet;
///
/// let set: EmptyFrozenSet<&str> = EmptyFrozenSet::new();
/// assert!(set.is_empty());
/// assert_eq!(set.count(&"anything"), 0);
/// assert_eq!(set.find(&"anything"), None);
/// assert_eq!(set.equal_range(&"anything"), 0..0);
/// assert_eq!(set.iter().next(), None);
/// ```
pub struct EmptyFrozenSet<K, C = Less> {
    compare: C,
    marker: PhantomData<fn() -> K>,
}

impl<K> EmptyFrozenSet<K> {
    /// Creates an empty set with the natural ordering.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::with_compare(Less)
    }
}

impl<K, C> EmptyFrozenSet<K, C> {
    /// Creates an empty set that stores `compare`.
    #[inline]
    #[must_use]
    pub const fn with_compare(compare: C) -> Self {
        Self {
            compare,
            marker: PhantomData,
        }
    }

    /// Creates an empty set from an iterator that must yield no keys.
    ///
    /// # Errors
    ///
    /// Returns [`FrozenSetError::LengthMismatch`] with `expected: 0` and
    /// `actual: 1` if the iterator yields any key. Only the first key is read.
    pub fn try_from_iter<I>(keys: I, compare: C) -> Result<Self, FrozenSetError>
    where
        I: IntoIterator<Item = K>,
    {
        if keys.into_iter().next().is_some() {
            return Err(rejected::<K>(FrozenSetError::LengthMismatch {
                expected: 0,
                actual: 1,
            }));
        }
        super::constructed::<K>(0);
        Ok(Self::with_compare(compare))
    }

    /// Always `0`.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        0
    }

    /// Always `0`.
    #[inline]
    #[must_use]
    pub const fn max_size(&self) -> usize {
        0
    }

    /// Always `true`.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        true
    }

    /// Always `0`.
    #[inline]
    #[must_use]
    pub const fn count(&self, _key: &K) -> usize {
        0
    }

    /// Always `false`.
    #[inline]
    #[must_use]
    pub const fn contains(&self, _key: &K) -> bool {
        false
    }

    /// Always `None`.
    #[inline]
    #[must_use]
    pub const fn find(&self, _key: &K) -> Option<&K> {
        None
    }

    /// Always the end position, `0`.
    #[inline]
    #[must_use]
    pub const fn find_index(&self, _key: &K) -> usize {
        0
    }

    /// Always the end position, `0`.
    #[inline]
    #[must_use]
    pub const fn lower_bound(&self, _key: &K) -> usize {
        0
    }

    /// Always the end position, `0`.
    #[inline]
    #[must_use]
    pub const fn upper_bound(&self, _key: &K) -> usize {
        0
    }

    /// Always the empty range `0..0`.
    #[inline]
    #[must_use]
    pub const fn equal_range(&self, _key: &K) -> Range<usize> {
        0..0
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

    /// Returns a copy of the comparator.
    #[inline]
    #[must_use]
    pub fn value_comp(&self) -> C
    where
        C: Clone,
    {
        self.compare.clone()
    }

    /// Always `0`; the begin and end positions coincide.
    #[inline]
    #[must_use]
    pub const fn begin(&self) -> usize {
        0
    }

    /// Always `0`; the begin and end positions coincide.
    #[inline]
    #[must_use]
    pub const fn end(&self) -> usize {
        0
    }

    /// Returns the empty slice.
    #[inline]
    #[must_use]
    pub const fn as_slice(&self) -> &[K] {
        &[]
    }

    /// Always `None`.
    #[inline]
    #[must_use]
    pub const fn get(&self, _position: usize) -> Option<&K> {
        None
    }

    /// Always `None`.
    #[inline]
    #[must_use]
    pub const fn first(&self) -> Option<&K> {
        None
    }

    /// Always `None`.
    #[inline]
    #[must_use]
    pub const fn last(&self) -> Option<&K> {
        None
    }

    /// Returns an iterator that yields nothing.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, K> {
        self.as_slice().iter()
    }

    /// Returns an iterator that yields nothing.
    #[inline]
    pub fn iter_rev(&self) -> std::iter::Rev<std::slice::Iter<'_, K>> {
        self.as_slice().iter().rev()
    }

    /// Returns the (empty) key array.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> [K; 0] {
        []
    }
}

impl<K, C: Compare<K>> OrderedLookup for EmptyFrozenSet<K, C> {
    type Key = K;
    type Comparator = C;

    #[inline]
    fn as_slice(&self) -> &[K] {
        &[]
    }

    #[inline]
    fn comparator(&self) -> &C {
        &self.compare
    }

    #[inline]
    fn count(&self, _key: &K) -> usize {
        0
    }

    #[inline]
    fn find_index(&self, _key: &K) -> usize {
        0
    }

    #[inline]
    fn lower_bound(&self, _key: &K) -> usize {
        0
    }

    #[inline]
    fn upper_bound(&self, _key: &K) -> usize {
        0
    }

    #[inline]
    fn len(&self) -> usize {
        0
    }

    #[inline]
    fn contains(&self, _key: &K) -> bool {
        false
    }

    #[inline]
    fn find(&self, _key: &K) -> Option<&K> {
        None
    }

    #[inline]
    fn equal_range(&self, _key: &K) -> Range<usize> {
        0..0
    }
}

impl<K, C: Clone> Clone for EmptyFrozenSet<K, C> {
    #[inline]
    fn clone(&self) -> Self {
        Self::with_compare(self.compare.clone())
    }
}

impl<K, C: Copy> Copy for EmptyFrozenSet<K, C> {}

impl<K, C: Default> Default for EmptyFrozenSet<K, C> {
    #[inline]
    fn default() -> Self {
        Self::with_compare(C::default())
    }
}

impl<K, C> AsRef<[K]> for EmptyFrozenSet<K, C> {
    #[inline]
    fn as_ref(&self) -> &[K] {
        &[]
    }
}

impl<K, C> Index<usize> for EmptyFrozenSet<K, C> {
    type Output = K;

    #[inline]
    fn index(&self, position: usize) -> &K {
        &self.as_slice()[position]
    }
}

impl<K, C: Default> From<[K; 0]> for EmptyFrozenSet<K, C> {
    #[inline]
    fn from(_keys: [K; 0]) -> Self {
        super::constructed::<K>(0);
        Self::default()
    }
}

impl<K, C: Default> TryFrom<&[K]> for EmptyFrozenSet<K, C> {
    type Error = FrozenSetError;

    #[inline]
    fn try_from(keys: &[K]) -> Result<Self, Self::Error> {
        if keys.is_empty() {
            super::constructed::<K>(0);
            Ok(Self::default())
        } else {
            Err(rejected::<K>(FrozenSetError::LengthMismatch {
                expected: 0,
                actual: keys.len(),
            }))
        }
    }
}

impl<K, C: Default> TryFrom<Vec<K>> for EmptyFrozenSet<K, C> {
    type Error = FrozenSetError;

    #[inline]
    fn try_from(keys: Vec<K>) -> Result<Self, Self::Error> {
        Self::try_from(keys.as_slice())
    }
}

impl<'a, K, C> IntoIterator for &'a EmptyFrozenSet<K, C> {
    type Item = &'a K;
    type IntoIter = std::slice::Iter<'a, K>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, C> IntoIterator for EmptyFrozenSet<K, C> {
    type Item = K;
    type IntoIter = std::iter::Empty<K>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        std::iter::empty()
    }
}

impl<K, C> fmt::Debug for EmptyFrozenSet<K, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("{}")
    }
}

impl<K, C> fmt::Display for EmptyFrozenSet<K, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("{}")
    }
}

impl<K, C> PartialEq for EmptyFrozenSet<K, C> {
    #[inline]
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<K, C> Eq for EmptyFrozenSet<K, C> {}

impl<K, C> Hash for EmptyFrozenSet<K, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(0);
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, C> serde::Serialize for EmptyFrozenSet<K, C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        serializer.serialize_seq(Some(0))?.end()
    }
}

#[cfg(feature = "serde")]
struct EmptyFrozenSetVisitor<K, C> {
    marker: PhantomData<fn() -> (K, C)>,
}

#[cfg(feature = "serde")]
impl<'de, K, C> serde::de::Visitor<'de> for EmptyFrozenSetVisitor<K, C>
where
    K: serde::Deserialize<'de>,
    C: Default,
{
    type Value = EmptyFrozenSet<K, C>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an empty sequence")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        if access.next_element::<K>()?.is_some() {
            return Err(<A::Error as serde::de::Error>::invalid_length(1, &self));
        }
        super::constructed::<K>(0);
        Ok(EmptyFrozenSet::default())
    }
}

#[cfg(feature = "serde")]
impl<'de, K, C> serde::Deserialize<'de> for EmptyFrozenSet<K, C>
where
    K: serde::Deserialize<'de>,
    C: Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(EmptyFrozenSetVisitor {
            marker: PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::Greater;
    use rstest::rstest;

    #[rstest]
    fn test_capacity_constants() {
        let set: EmptyFrozenSet<i32> = EmptyFrozenSet::new();
        assert_eq!(set.len(), 0);
        assert_eq!(set.max_size(), 0);
        assert!(set.is_empty());
        assert_eq!(set.begin(), set.end());
    }

    #[rstest]
    #[case(i32::MIN)]
    #[case(0)]
    #[case(i32::MAX)]
    fn test_every_lookup_is_not_found(#[case] key: i32) {
        let set: EmptyFrozenSet<i32> = EmptyFrozenSet::new();
        assert_eq!(set.count(&key), 0);
        assert!(!set.contains(&key));
        assert_eq!(set.find(&key), None);
        assert_eq!(set.find_index(&key), set.end());
        assert_eq!(set.lower_bound(&key), set.end());
        assert_eq!(set.upper_bound(&key), set.end());
        assert_eq!(set.equal_range(&key), set.end()..set.end());
    }

    #[rstest]
    fn test_lookups_never_call_comparator() {
        let panicking = |_: &i32, _: &i32| -> bool { panic!("comparator must not be called") };
        let set: EmptyFrozenSet<i32, _> = EmptyFrozenSet::with_compare(panicking);
        assert_eq!(OrderedLookup::count(&set, &1), 0);
        assert_eq!(OrderedLookup::find(&set, &1), None);
        assert_eq!(OrderedLookup::equal_range(&set, &1), 0..0);
        assert!(!OrderedLookup::contains(&set, &1));
    }

    #[rstest]
    fn test_iterators_are_empty() {
        let set: EmptyFrozenSet<String> = EmptyFrozenSet::new();
        assert_eq!(set.iter().count(), 0);
        assert_eq!(set.iter_rev().count(), 0);
        assert_eq!((&set).into_iter().len(), 0);
        assert_eq!(set.into_iter().count(), 0);
    }

    #[rstest]
    fn test_comparator_is_kept() {
        let set: EmptyFrozenSet<i32, Greater> = EmptyFrozenSet::with_compare(Greater);
        assert_eq!(set.key_comp(), Greater);
        assert_eq!(set.value_comp(), Greater);
    }

    #[rstest]
    fn test_try_from_rejects_keys() {
        let error = EmptyFrozenSet::<i32>::try_from(vec![1, 2]).unwrap_err();
        assert_eq!(
            error,
            FrozenSetError::LengthMismatch {
                expected: 0,
                actual: 2
            }
        );
        assert!(EmptyFrozenSet::<i32>::try_from(Vec::new()).is_ok());
    }

    #[rstest]
    fn test_try_from_iter() {
        assert!(EmptyFrozenSet::try_from_iter(std::iter::empty::<u8>(), Less).is_ok());
        assert_eq!(
            EmptyFrozenSet::try_from_iter([1_u8], Less).unwrap_err(),
            FrozenSetError::LengthMismatch {
                expected: 0,
                actual: 1
            }
        );
    }

    #[rstest]
    fn test_try_from_iter_rejects_endless_input() {
        let result = EmptyFrozenSet::try_from_iter(std::iter::repeat(0_u8), Less);
        assert_eq!(
            result.unwrap_err(),
            FrozenSetError::LengthMismatch {
                expected: 0,
                actual: 1
            }
        );
    }

    #[rstest]
    fn test_debug_and_display() {
        let set: EmptyFrozenSet<i32> = EmptyFrozenSet::new();
        assert_eq!(format!("{set:?}"), "{}");
        assert_eq!(format!("{set}"), "{}");
    }

    #[rstest]
    fn test_from_empty_array() {
        let set: EmptyFrozenSet<i32> = [].into();
        assert_eq!(set, EmptyFrozenSet::default());
        assert_eq!(set.into_inner(), []);
    }
}

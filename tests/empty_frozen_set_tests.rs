//! Unit tests for EmptyFrozenSet.
//!
//! The empty set must answer exactly like a zero-sized `FrozenSet` without
//! ever touching a comparator or storage.

use frozen_set::{EmptyFrozenSet, FrozenSet, FrozenSetError, Greater, OrderedLookup};
use rstest::rstest;

#[rstest]
fn test_empty_set_of_integers() {
    let set: EmptyFrozenSet<i32> = EmptyFrozenSet::new();

    assert_eq!(set.len(), 0);
    assert_eq!(set.count(&7), 0);
    assert_eq!(set.begin(), set.end());
}

#[rstest]
fn test_empty_set_of_strings() {
    let set: EmptyFrozenSet<String> = EmptyFrozenSet::default();

    assert_eq!(set.len(), 0);
    assert_eq!(set.max_size(), 0);
    assert_eq!(set.count(&"anything".to_string()), 0);
    assert_eq!(set.iter().next(), None);
    assert_eq!(set.iter_rev().next(), None);
}

#[rstest]
#[case(0)]
#[case(-1)]
#[case(1_000_000)]
fn test_matches_zero_sized_frozen_set(#[case] key: i64) {
    let empty: EmptyFrozenSet<i64> = EmptyFrozenSet::new();
    let zero: FrozenSet<i64, 0> = FrozenSet::new([]);

    assert_eq!(empty.len(), zero.len());
    assert_eq!(empty.is_empty(), zero.is_empty());
    assert_eq!(empty.count(&key), zero.count(&key));
    assert_eq!(empty.find(&key), zero.find(&key));
    assert_eq!(empty.find_index(&key), zero.find_index(&key));
    assert_eq!(empty.lower_bound(&key), zero.lower_bound(&key));
    assert_eq!(empty.upper_bound(&key), zero.upper_bound(&key));
    assert_eq!(empty.equal_range(&key), zero.equal_range(&key));
    assert_eq!(empty.as_slice(), zero.as_slice());
}

#[rstest]
fn test_generic_code_accepts_both_variants() {
    fn present<S: OrderedLookup<Key = u16>>(set: &S, keys: &[u16]) -> usize {
        keys.iter().filter(|&key| set.contains(key)).count()
    }

    let keys = [1, 2, 3];
    assert_eq!(present(&FrozenSet::new([3, 9, 1]), &keys), 2);
    assert_eq!(present(&EmptyFrozenSet::new(), &keys), 0);
}

#[rstest]
fn test_empty_is_subset_of_everything() {
    let empty: EmptyFrozenSet<i32> = EmptyFrozenSet::new();
    let set = FrozenSet::new([1, 2]);

    assert!(empty.is_subset(&set));
    assert!(empty.is_disjoint(&set));
    assert!(!set.is_subset(&empty));
}

#[rstest]
fn test_comparator_only_state() {
    let set = EmptyFrozenSet::<u8, Greater>::with_compare(Greater);
    assert_eq!(set.key_comp(), Greater);
    assert_eq!(std::mem::size_of_val(&set), 0);
}

#[rstest]
fn test_non_empty_input_is_rejected() {
    let result = EmptyFrozenSet::<char>::try_from(&['x'][..]);

    assert_eq!(
        result.unwrap_err(),
        FrozenSetError::LengthMismatch {
            expected: 0,
            actual: 1
        }
    );
}

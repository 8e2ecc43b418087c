//! Declarative constructors for frozen sets.

/// Builds a frozen set from a literal list of keys.
///
/// The number of keys written at the call site picks the set type: an empty
/// list produces an [`EmptyFrozenSet`](crate::EmptyFrozenSet), anything else a
/// [`FrozenSet`](crate::FrozenSet) whose `N` is the number of keys.
///
/// A custom comparator is passed with `by <comparator>;` before the keys.
///
/// # Examples
///
/// ```rust
/// use frozen_set::{EmptyFrozenSet, Greater, frozen_set};
///
/// let ascending = frozen_set![5, 1, 3];
/// assert_eq!(ascending.as_slice(), &[1, 3, 5]);
///
/// let descending = frozen_set![by Greater; 1, 2, 3];
/// assert_eq!(descending.as_slice(), &[3, 2, 1]);
///
/// let empty: EmptyFrozenSet<i32> = frozen_set![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! frozen_set {
    () => {
        $crate::set::EmptyFrozenSet::new()
    };
    (by $compare:expr; $(,)?) => {
        $crate::set::EmptyFrozenSet::with_compare($compare)
    };
    (by $compare:expr; $($key:expr),+ $(,)?) => {
        $crate::set::FrozenSet::with_compare([$($key),+], $compare)
    };
    ($($key:expr),+ $(,)?) => {
        $crate::set::make_set([$($key),+])
    };
}

/// Declares lazily built `static` frozen sets.
///
/// Each set is built exactly once, on first access, and is then shared as an
/// immutable `&'static` value. The declared type decides the comparator
/// (through `Default`) and the size; a key list of the wrong length does not
/// compile.
///
/// # Examples
///
/// ```rust
/// use frozen_set::{EmptyFrozenSet, FrozenSet, Greater, frozen_static};
///
/// frozen_static! {
///     /// HTTP methods without a request body.
///     static BODYLESS: FrozenSet<&'static str, 3> = ["HEAD", "GET", "DELETE"];
///     static PRIORITIES: FrozenSet<u8, 3, Greater> = [1, 3, 2];
///     static NOTHING: EmptyFrozenSet<u8> = [];
/// }
///
/// assert!(BODYLESS.contains(&"GET"));
/// assert_eq!(PRIORITIES.as_slice(), &[3, 2, 1]);
/// assert_eq!(NOTHING.count(&1), 0);
/// ```
#[macro_export]
macro_rules! frozen_static {
    ($(
        $(#[$attribute:meta])*
        $visibility:vis static $name:ident : $set:ty = [$($key:expr),* $(,)?];
    )*) => {
        $(
            $(#[$attribute])*
            $visibility static $name: ::std::sync::LazyLock<$set> =
                ::std::sync::LazyLock::new(|| <$set as ::core::convert::From<_>>::from([$($key),*]));
        )*
    };
}

//! The literal key count at the call site selects the set type.

use frozen_set::{EmptyFrozenSet, FrozenSet, frozen_set};

fn main() {
    let three: FrozenSet<i32, 3> = frozen_set![2, 3, 1];
    let none: EmptyFrozenSet<i32> = frozen_set![];

    assert_eq!(three.len(), 3);
    assert_eq!(none.len(), 0);
}

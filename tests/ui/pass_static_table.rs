//! A lookup table declared as a lazily built static compiles and answers
//! queries from `main`.

use frozen_set::{FrozenSet, Greater, frozen_static};

frozen_static! {
    static PORTS: FrozenSet<u16, 4> = [443, 22, 80, 8080];
    static LEVELS: FrozenSet<&'static str, 3, Greater> = ["warn", "error", "info"];
}

fn main() {
    assert!(PORTS.contains(&80));
    assert_eq!(PORTS.as_slice(), &[22, 80, 443, 8080]);
    assert_eq!(LEVELS.as_slice(), &["warn", "info", "error"]);
}

//! Property-based tests for carousel navigation
//!
//! Uses proptest to verify the index invariants of `Carousel`.

use bizcard_core::Carousel;
use proptest::prelude::*;

/// Navigation steps a user (or the autoplay timer) can take
#[derive(Debug, Clone)]
enum NavOp {
    Next,
    Previous,
    GoTo(usize),
}

fn nav_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<NavOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => Just(NavOp::Next),
            3 => Just(NavOp::Previous),
            1 => (0..20usize).prop_map(NavOp::GoTo),
        ],
        0..max_ops,
    )
}

proptest! {
    /// `len` calls to `next()` visit every slide once and return to the start
    #[test]
    fn next_cycles_through_every_index(len in 2usize..50, start in 0usize..50) {
        let start = start % len;
        let mut c = Carousel::new(len, start).unwrap();
        let mut seen = vec![false; len];
        for _ in 0..len {
            seen[c.index()] = true;
            c.next();
        }
        prop_assert!(seen.iter().all(|s| *s));
        prop_assert_eq!(c.index(), start);
    }

    /// `previous()` undoes `next()` and vice versa
    #[test]
    fn previous_is_inverse_of_next(len in 1usize..50, start in 0usize..50) {
        let start = start % len;
        let mut c = Carousel::new(len, start).unwrap();
        c.next();
        c.previous();
        prop_assert_eq!(c.index(), start);
        c.previous();
        c.next();
        prop_assert_eq!(c.index(), start);
    }

    /// The index stays in range whatever the sequence of operations
    #[test]
    fn index_always_in_range(len in 0usize..10, ops in nav_ops_strategy(100)) {
        let mut c = Carousel::new(len, 0).unwrap();
        for op in ops {
            match op {
                NavOp::Next => c.next(),
                NavOp::Previous => c.previous(),
                NavOp::GoTo(i) => {
                    let result = c.go_to(i);
                    prop_assert_eq!(result.is_ok(), i < len);
                }
            }
            if len == 0 {
                prop_assert_eq!(c.index(), 0);
            } else {
                prop_assert!(c.index() < len);
            }
        }
    }
}

//! Property tests for the ring's structural invariants.

use corelib::{Error, Ring};
use proptest::collection::vec;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Insert(i64),
    Remove,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![any::<i64>().prop_map(Op::Insert), Just(Op::Remove)]
}

proptest! {
    /// Length equals successful insertions minus successful removals, and
    /// removal on an empty ring is the only way a removal fails.
    #[test]
    fn length_tracks_inserts_and_removes(ops in vec(op_strategy(), 0..64)) {
        let mut ring = Ring::new();
        let mut expected = 0usize;
        for op in ops {
            match op {
                Op::Insert(value) => {
                    ring.insert_after_cursor(value);
                    expected += 1;
                }
                Op::Remove => match ring.remove_after_cursor() {
                    Ok(_) => expected -= 1,
                    Err(err) => {
                        prop_assert_eq!(err, Error::EmptyRing);
                        prop_assert_eq!(expected, 0);
                    }
                },
            }
            prop_assert_eq!(ring.len(), expected);
        }
    }

    /// Stepping forward then backward returns to the same cursor position,
    /// from any starting rotation.
    #[test]
    fn step_forward_then_backward_is_identity(
        values in vec(any::<i32>(), 1..8),
        rotation in 0..8usize,
    ) {
        let mut ring = Ring::from_values(values).unwrap();
        for _ in 0..rotation {
            ring.step_forward().unwrap();
        }
        let snapshot = ring.to_vec();
        ring.step_forward().unwrap();
        ring.step_backward().unwrap();
        prop_assert_eq!(ring.to_vec(), snapshot);
    }

    /// Bulk load of a ring's own cursor-order dump realigns after exactly
    /// one forward step (the dump's last element becomes the new cursor).
    #[test]
    fn bulk_load_round_trip_realigns_with_one_step(
        values in vec(any::<i16>(), 1..8),
    ) {
        let original = Ring::from_values(values).unwrap();
        let mut reloaded = Ring::from_values(original.to_vec()).unwrap();
        reloaded.step_forward().unwrap();
        prop_assert_eq!(reloaded, original);
    }

    /// Rings built from the same sequence are equal and hash equal.
    #[test]
    fn equal_rings_hash_equal(values in vec(any::<i64>(), 1..6)) {
        let ring1 = Ring::from_values(values.clone()).unwrap();
        let ring2 = Ring::from_values(values).unwrap();
        prop_assert_eq!(&ring1, &ring2);
        prop_assert_eq!(ring1.ring_hash(), ring2.ring_hash());
    }

    /// Mutating a clone never shows through to the original.
    #[test]
    fn clone_is_independent(
        values in vec(any::<i32>(), 1..6),
        extra in any::<i32>(),
    ) {
        let original = Ring::from_values(values).unwrap();
        let snapshot = original.to_vec();

        let mut copy = original.clone();
        copy.insert_after_cursor(extra);
        copy.set(0, extra).unwrap();
        copy.remove_after_cursor().unwrap();

        prop_assert_eq!(original.to_vec(), snapshot);
    }

    /// Indexed access agrees with the cursor-order dump.
    #[test]
    fn to_vec_matches_indexed_get(values in vec(any::<u8>(), 1..8)) {
        let ring = Ring::from_values(values).unwrap();
        let dump = ring.to_vec();
        prop_assert_eq!(dump.len(), ring.len());
        for (index, value) in dump.into_iter().enumerate() {
            prop_assert_eq!(*ring.get(index).unwrap(), value);
        }
    }

    /// Serde round trip reproduces the ring exactly, cursor included.
    #[test]
    fn serde_round_trip_is_identity(
        values in vec(any::<i64>(), 0..8),
        rotation in 0..8usize,
    ) {
        let mut ring = Ring::new();
        for value in values {
            ring.insert_after_cursor(value);
        }
        if ring.is_non_empty() {
            for _ in 0..rotation {
                ring.step_forward().unwrap();
            }
        }
        let json = serde_json::to_string(&ring).unwrap();
        let back: Ring<i64> = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, ring);
    }
}

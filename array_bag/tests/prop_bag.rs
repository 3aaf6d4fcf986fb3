//! Property-based tests for the array-backed bag.

use proptest::prelude::*;

use array_bag::{ArrayBag, Bag, BagError, DEFAULT_CAPACITY};

#[derive(Debug, Clone)]
enum Op {
    Add(u8),
    AddNone,
    Remove,
    RemoveEntry(u8),
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (0u8..16).prop_map(Op::Add),
        1 => Just(Op::AddNone),
        2 => Just(Op::Remove),
        3 => (0u8..16).prop_map(Op::RemoveEntry),
        1 => Just(Op::Clear),
    ]
}

fn sorted(mut values: Vec<u8>) -> Vec<u8> {
    values.sort_unstable();
    values
}

/// Removes one occurrence of `value` from the reference model.
fn model_remove(model: &mut Vec<u8>, value: u8) -> bool {
    match model.iter().position(|v| *v == value) {
        Some(i) => {
            model.swap_remove(i);
            true
        }
        None => false,
    }
}

//
// -----------------------------------------------------------------------------
// Content Properties
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_adds_round_trip(values in prop::collection::vec(any::<u8>(), 0..500)) {
        let mut bag = ArrayBag::<u8>::new();
        for v in &values {
            prop_assert!(bag.add(*v).unwrap());
        }

        let exported = bag.to_vec().unwrap();
        prop_assert_eq!(exported.len(), bag.len());
        prop_assert_eq!(sorted(exported), sorted(values));
    }
}

proptest! {
    #[test]
    fn prop_frequency_matches_occurrences(
        values in prop::collection::vec(0u8..8, 0..200),
        probe in 0u8..10
    ) {
        let bag = ArrayBag::try_from_iter(values.iter().copied()).unwrap();
        let expected = values.iter().filter(|v| **v == probe).count();

        prop_assert_eq!(bag.frequency_of(&probe).unwrap(), expected);
        prop_assert_eq!(bag.contains(&probe).unwrap(), expected > 0);
    }
}

proptest! {
    #[test]
    fn prop_matches_multiset_model(ops in prop::collection::vec(op(), 0..300)) {
        let mut bag = ArrayBag::<u8>::new();
        let mut model: Vec<u8> = Vec::new();

        for op in ops {
            match op {
                Op::Add(v) => {
                    prop_assert!(bag.add(v).unwrap());
                    model.push(v);
                }
                Op::AddNone => {
                    prop_assert!(!bag.add(None::<u8>).unwrap());
                }
                Op::Remove => {
                    match bag.remove().unwrap() {
                        Some(v) => prop_assert!(model_remove(&mut model, v)),
                        None => prop_assert!(model.is_empty()),
                    }
                }
                Op::RemoveEntry(v) => {
                    let expected = model_remove(&mut model, v);
                    prop_assert_eq!(bag.remove_entry(&v).unwrap(), expected);
                }
                Op::Clear => {
                    bag.clear().unwrap();
                    model.clear();
                }
            }

            prop_assert_eq!(bag.len(), model.len());
            prop_assert_eq!(bag.is_empty(), model.is_empty());
        }

        prop_assert_eq!(sorted(bag.to_vec().unwrap()), sorted(model));
    }
}

//
// -----------------------------------------------------------------------------
// Capacity Properties
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_capacity_is_doubled_default(n in 0usize..2_000) {
        let mut bag = ArrayBag::<usize>::new();
        for i in 0..n {
            bag.add(i).unwrap();
        }

        let capacity = bag.capacity();
        prop_assert!(capacity >= bag.len());
        prop_assert_eq!(capacity % DEFAULT_CAPACITY, 0);
        prop_assert!((capacity / DEFAULT_CAPACITY).is_power_of_two());
        // Never more than double what is needed.
        prop_assert!(capacity == DEFAULT_CAPACITY || capacity < 2 * n);
    }
}

proptest! {
    #[test]
    fn prop_invalid_capacity_rejected(capacity in 10_001usize..1_000_000) {
        prop_assert_eq!(
            ArrayBag::<u8>::with_capacity(capacity).unwrap_err(),
            BagError::InvalidCapacity(capacity)
        );
    }
}

proptest! {
    #[test]
    fn prop_valid_capacity_accepted(capacity in 1usize..=10_000) {
        let bag = ArrayBag::<u8>::with_capacity(capacity).unwrap();
        prop_assert_eq!(bag.capacity(), capacity);
        prop_assert!(bag.is_empty());
    }
}

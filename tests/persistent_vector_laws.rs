//! Property-based tests for PersistentVector laws.
//!
//! This module verifies the invariants of PersistentVector against a plain
//! `Vec` model using proptest.

use std::ops::ControlFlow;

use lambars_vector::persistent::PersistentVector;
use proptest::prelude::*;

/// Operations applied to both the vector and its `Vec` model.
#[derive(Debug, Clone)]
enum Operation {
    PushBack(i32),
    Set(usize, i32),
    DropFirst(usize),
    Take(usize),
}

fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        8 => any::<i32>().prop_map(Operation::PushBack),
        2 => (any::<usize>(), any::<i32>()).prop_map(|(index, value)| Operation::Set(index, value)),
        1 => (0..40_usize).prop_map(Operation::DropFirst),
        1 => (0..400_usize).prop_map(Operation::Take),
    ]
}

// =============================================================================
// Basic Laws
// =============================================================================

proptest! {
    /// Get-Set Law: the element written by set is read back by get
    #[test]
    fn prop_get_set_law(
        elements in prop::collection::vec(any::<i32>(), 1..200),
        seed: usize,
        new_value: i32
    ) {
        let vector: PersistentVector<i32> = elements.iter().copied().collect();
        let index = seed % vector.len();

        let updated = vector.set(index, new_value);
        prop_assert_eq!(updated.get(index), Some(&new_value));
    }

    /// Get-Set-Other Law: set does not affect any other position
    #[test]
    fn prop_get_set_other_law(
        elements in prop::collection::vec(any::<i32>(), 2..200),
        seed: usize
    ) {
        let vector: PersistentVector<i32> = elements.iter().copied().collect();
        let index = seed % vector.len();
        let updated = vector.set(index, 99999);

        for check_index in (0..vector.len()).filter(|&other| other != index) {
            prop_assert_eq!(updated.get(check_index), vector.get(check_index));
        }
    }

    /// Append-Length Law: push_back grows the length by one
    #[test]
    fn prop_push_back_length_law(
        elements in prop::collection::vec(any::<i32>(), 0..100),
        new_element: i32
    ) {
        let vector: PersistentVector<i32> = elements.iter().copied().collect();
        let extended = vector.push_back(new_element);
        prop_assert_eq!(extended.len(), vector.len() + 1);
        prop_assert_eq!(extended.last(), Some(&new_element));
    }

    /// Negative indices mirror non-negative ones
    #[test]
    fn prop_negative_index_law(
        elements in prop::collection::vec(any::<i32>(), 0..200),
        dropped in 0..50_usize
    ) {
        let vector: PersistentVector<i32> = elements.iter().copied().collect();
        let vector = vector.drop_first(dropped);
        let length = vector.len();

        for position in 0..length {
            let negative = isize::try_from(length - position).unwrap();
            prop_assert_eq!(vector.get(-negative), vector.get(position));
        }
        let beyond = isize::try_from(length + 1).unwrap();
        prop_assert_eq!(vector.get(-beyond), None);
        prop_assert_eq!(vector.get(length), None);
    }

    /// Iteration preserves order
    #[test]
    fn prop_iter_preserves_order(
        elements in prop::collection::vec(any::<i32>(), 0..300)
    ) {
        let vector: PersistentVector<i32> = elements.iter().copied().collect();
        let collected: Vec<i32> = vector.iter().copied().collect();
        prop_assert_eq!(collected, elements.clone());

        let reversed: Vec<i32> = vector.iter().rev().copied().collect();
        let expected: Vec<i32> = elements.iter().rev().copied().collect();
        prop_assert_eq!(reversed, expected);
    }

    /// Owned iteration yields the same elements as borrowed iteration
    #[test]
    fn prop_into_iter_preserves_order(
        elements in prop::collection::vec(any::<i32>(), 0..300)
    ) {
        let vector: PersistentVector<i32> = elements.iter().copied().collect();
        let collected: Vec<i32> = vector.into_iter().collect();
        prop_assert_eq!(collected, elements);
    }
}

// =============================================================================
// Take / Drop Laws
// =============================================================================

proptest! {
    /// take(n).len() == min(n, len)
    #[test]
    fn prop_take_length_law(
        elements in prop::collection::vec(any::<i32>(), 0..100),
        count in 0..150_usize
    ) {
        let vector: PersistentVector<i32> = elements.iter().copied().collect();
        prop_assert_eq!(vector.take(count).len(), count.min(elements.len()));
    }

    /// drop_first(n).len() == max(len - n, 0)
    #[test]
    fn prop_drop_first_length_law(
        elements in prop::collection::vec(any::<i32>(), 0..100),
        count in 0..150_usize
    ) {
        let vector: PersistentVector<i32> = elements.iter().copied().collect();
        prop_assert_eq!(vector.drop_first(count).len(), elements.len().saturating_sub(count));
    }

    /// take and drop_first partition the vector
    #[test]
    fn prop_take_drop_partition(
        elements in prop::collection::vec(any::<i32>(), 0..100),
        count in 0..150_usize
    ) {
        let vector: PersistentVector<i32> = elements.iter().copied().collect();
        let mut joined = vector.take(count).to_vec();
        joined.extend(vector.drop_first(count).to_vec());
        prop_assert_eq!(joined, elements);
    }
}

// =============================================================================
// Persistence Laws
// =============================================================================

proptest! {
    /// Push back does not modify original
    #[test]
    fn prop_push_back_persistence(
        elements in prop::collection::vec(any::<i32>(), 0..100),
        new_element: i32
    ) {
        let original: PersistentVector<i32> = elements.iter().copied().collect();
        let _new_version = original.push_back(new_element);

        prop_assert_eq!(original.len(), elements.len());
        for (index, element) in elements.iter().enumerate() {
            prop_assert_eq!(original.get(index), Some(element));
        }
    }

    /// Set does not modify original
    #[test]
    fn prop_set_persistence(
        elements in prop::collection::vec(any::<i32>(), 1..100),
        seed: usize
    ) {
        let original: PersistentVector<i32> = elements.iter().copied().collect();
        let index = seed % original.len();
        let _updated = original.set(index, 99999);

        for (position, element) in elements.iter().enumerate() {
            prop_assert_eq!(original.get(position), Some(element));
        }
    }

    /// Any sequence of operations agrees with the Vec model, and every
    /// intermediate version stays readable afterwards
    #[test]
    fn prop_operations_match_vec_model(
        operations in prop::collection::vec(operation_strategy(), 0..300)
    ) {
        let mut vector: PersistentVector<i32> = PersistentVector::new();
        let mut model: Vec<i32> = Vec::new();
        let mut history: Vec<(PersistentVector<i32>, Vec<i32>)> = Vec::new();

        for operation in operations {
            match operation {
                Operation::PushBack(value) => {
                    vector = vector.push_back(value);
                    model.push(value);
                }
                Operation::Set(seed, value) => {
                    if model.is_empty() {
                        prop_assert!(vector.try_set(seed, value).is_err());
                    } else {
                        let index = seed % model.len();
                        vector = vector.set(index, value);
                        model[index] = value;
                    }
                }
                Operation::DropFirst(count) => {
                    vector = vector.drop_first(count);
                    model.drain(..count.min(model.len()));
                }
                Operation::Take(count) => {
                    vector = vector.take(count);
                    model.truncate(count);
                }
            }
            prop_assert_eq!(vector.len(), model.len());
            history.push((vector.clone(), model.clone()));
        }

        for (version, expected) in history {
            prop_assert_eq!(version.to_vec(), expected);
        }
    }
}

// =============================================================================
// Iteration and Equality Laws
// =============================================================================

proptest! {
    /// Visiting with an early stop sees exactly the prefix up to the stop
    #[test]
    fn prop_visit_stops_after_requested_count(
        elements in prop::collection::vec(any::<i32>(), 1..100),
        seed: usize
    ) {
        let vector: PersistentVector<i32> = elements.iter().copied().collect();
        let stop_after = seed % elements.len() + 1;

        let mut seen = Vec::new();
        let outcome: Result<(), ()> = vector.visit(|element| {
            seen.push(*element);
            Ok(if seen.len() == stop_after {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            })
        });

        prop_assert!(outcome.is_ok());
        prop_assert_eq!(seen, elements[..stop_after].to_vec());
    }

    /// Equality agrees with the Vec model
    #[test]
    fn prop_equality_matches_vec(
        left in prop::collection::vec(0..3_i32, 0..40),
        right in prop::collection::vec(0..3_i32, 0..40)
    ) {
        let left_vector: PersistentVector<i32> = left.iter().copied().collect();
        let right_vector: PersistentVector<i32> = right.iter().copied().collect();
        prop_assert_eq!(left_vector == right_vector, left == right);
    }

    /// Rendering agrees with joining the elements
    #[test]
    fn prop_display_matches_join(
        elements in prop::collection::vec(any::<i32>(), 0..50)
    ) {
        let vector: PersistentVector<i32> = elements.iter().copied().collect();
        let joined: Vec<String> = elements.iter().map(ToString::to_string).collect();
        prop_assert_eq!(vector.to_string(), format!("[{}]", joined.join(", ")));
    }
}

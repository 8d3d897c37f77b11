//! Property-based tests for ImmutableSequence.
//!
//! These tests verify the read, transform and immutability laws that every
//! sequence must satisfy.

use immutable_sequence::sequence::{ImmutableSequence, ListMutation, SequenceError};
use proptest::prelude::*;

// =============================================================================
// Strategy for generating ImmutableSequence
// =============================================================================

/// Generates an `ImmutableSequence<i32>` with up to `max_size` elements.
fn immutable_sequence_strategy(max_size: usize) -> impl Strategy<Value = ImmutableSequence<i32>> {
    prop::collection::vec(any::<i32>(), 0..max_size).prop_map(ImmutableSequence::from)
}

/// Generates a small `ImmutableSequence<i32>` for faster tests.
fn small_sequence() -> impl Strategy<Value = ImmutableSequence<i32>> {
    immutable_sequence_strategy(20)
}

/// Generates a non-empty sequence together with a valid index into it.
fn sequence_with_index() -> impl Strategy<Value = (ImmutableSequence<i32>, usize)> {
    prop::collection::vec(any::<i32>(), 1..20).prop_flat_map(|elements| {
        let length = elements.len();
        (Just(ImmutableSequence::from(elements)), 0..length)
    })
}

proptest! {
    // =========================================================================
    // Basic Properties
    // =========================================================================

    #[test]
    fn prop_len_matches_iter_count(sequence in small_sequence()) {
        prop_assert_eq!(sequence.len(), sequence.iter().count());
    }

    #[test]
    fn prop_is_empty_matches_len_zero(sequence in small_sequence()) {
        prop_assert_eq!(sequence.is_empty(), sequence.iter().count() == 0);
    }

    #[test]
    fn prop_get_matches_to_vec((sequence, index) in sequence_with_index()) {
        let exported = sequence.to_vec();
        prop_assert_eq!(sequence.get(index), Ok(&exported[index]));
    }

    #[test]
    fn prop_get_at_len_is_out_of_bounds(sequence in small_sequence()) {
        let length = sequence.len();
        prop_assert_eq!(
            sequence.get(length),
            Err(SequenceError::IndexOutOfBounds { index: length, length })
        );
    }

    #[test]
    fn prop_to_vec_mutation_is_not_observable(sequence in small_sequence(), value: i32) {
        let before = sequence.to_vec();
        let mut exported = sequence.to_vec();
        exported.push(value);
        exported.reverse();
        prop_assert_eq!(sequence.to_vec(), before);
    }

    // =========================================================================
    // Search Properties
    // =========================================================================

    #[test]
    fn prop_index_of_finds_first_match((sequence, index) in sequence_with_index()) {
        let value = sequence[index];
        let found = sequence.index_of(&value);
        prop_assert!(found.is_some_and(|first| first <= index && sequence[first] == value));
        let first = found.unwrap_or(index);
        prop_assert!(!sequence.as_slice()[..first].contains(&value));
    }

    #[test]
    fn prop_last_index_of_finds_last_match((sequence, index) in sequence_with_index()) {
        let value = sequence[index];
        let found = sequence.last_index_of(&value);
        prop_assert!(found.is_some_and(|last| last >= index && sequence[last] == value));
        let last = found.unwrap_or(index);
        prop_assert!(!sequence.as_slice()[last + 1..].contains(&value));
    }

    #[test]
    fn prop_contains_all_of_own_elements(sequence in small_sequence()) {
        prop_assert!(sequence.contains_all(sequence.iter()));
    }

    // =========================================================================
    // Reverse Properties
    // =========================================================================

    #[test]
    fn prop_reverse_reverse_is_identity(sequence in small_sequence()) {
        prop_assert_eq!(sequence.reverse().reverse(), sequence);
    }

    #[test]
    fn prop_reverse_preserves_length(sequence in small_sequence()) {
        prop_assert_eq!(sequence.reverse().len(), sequence.len());
    }

    #[test]
    fn prop_reverse_mirrors_indices((sequence, index) in sequence_with_index()) {
        let reversed = sequence.reverse();
        prop_assert_eq!(reversed.get(sequence.len() - 1 - index), sequence.get(index));
    }

    // =========================================================================
    // Filter Properties
    // =========================================================================

    #[test]
    fn prop_filter_keeps_only_matching(sequence in small_sequence()) {
        let filtered = sequence.filter(|value| value % 3 == 0);
        prop_assert!(filtered.iter().all(|value| value % 3 == 0));
        prop_assert!(filtered.len() <= sequence.len());
    }

    #[test]
    fn prop_filter_preserves_relative_order(sequence in small_sequence()) {
        let filtered = sequence.filter(|value| *value >= 0);
        let expected: Vec<i32> = sequence.iter().copied().filter(|value| *value >= 0).collect();
        prop_assert_eq!(filtered.to_vec(), expected);
    }

    #[test]
    fn prop_filter_true_is_identity(sequence in small_sequence()) {
        prop_assert_eq!(sequence.filter(|_| true), sequence);
    }

    // =========================================================================
    // Map Properties
    // =========================================================================

    #[test]
    fn prop_map_preserves_length(sequence in small_sequence()) {
        prop_assert_eq!(sequence.map(|value| i64::from(*value) * 2).len(), sequence.len());
    }

    #[test]
    fn prop_map_applies_function_pointwise((sequence, index) in sequence_with_index()) {
        let function = |value: &i32| i64::from(*value) - 7;
        let mapped = sequence.map(function);
        let expected = function(&sequence[index]);
        prop_assert_eq!(mapped.get(index), Ok(&expected));
    }

    #[test]
    fn prop_map_identity(sequence in small_sequence()) {
        prop_assert_eq!(sequence.map(|value| *value), sequence);
    }

    // =========================================================================
    // Fold Properties
    // =========================================================================

    #[test]
    fn prop_fold_left_sum_is_order_independent(sequence in immutable_sequence_strategy(20).prop_filter("non-empty", |sequence| !sequence.is_empty())) {
        let forward = sequence.map(|value| i64::from(*value)).fold_left(|x, y| x + y);
        let backward = sequence.reverse().map(|value| i64::from(*value)).fold_left(|x, y| x + y);
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn prop_fold_left_matches_seeded_fold(sequence in immutable_sequence_strategy(20).prop_filter("non-empty", |sequence| !sequence.is_empty())) {
        let wide = sequence.map(|value| i64::from(*value));
        let seeded = wide.sub_sequence(1, wide.len()).unwrap().fold(wide[0], |x, y| x + y);
        prop_assert_eq!(wide.fold_left(|x, y| x + y), Ok(seeded));
    }

    // =========================================================================
    // Sub-sequence Properties
    // =========================================================================

    #[test]
    fn prop_sub_sequence_matches_slice(sequence in small_sequence(), first: usize, second: usize) {
        let length = sequence.len();
        let from_index = first % (length + 1);
        let to_index = from_index + second % (length - from_index + 1);
        let copied = sequence.sub_sequence(from_index, to_index).unwrap();
        prop_assert_eq!(copied.as_slice(), &sequence.as_slice()[from_index..to_index]);
    }

    // =========================================================================
    // Immutability Properties
    // =========================================================================

    #[test]
    fn prop_mutations_are_rejected(sequence in small_sequence(), value: i32) {
        let before = sequence.to_vec();
        let mut target = sequence.clone();

        prop_assert!(target.add(value).is_err());
        prop_assert!(ListMutation::set(&mut target, 0, value).is_err());
        prop_assert!(ListMutation::remove(&mut target, &value).is_err());
        prop_assert!(target.remove_all(&[value]).is_err());
        prop_assert!(target.retain_all(&[value]).is_err());
        prop_assert!(ListMutation::clear(&mut target).is_err());

        prop_assert_eq!(target.to_vec(), before);
    }
}

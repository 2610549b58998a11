// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for the Pivot Partition Sort
//!
//! The ranking sort must behave exactly like a stable sort on the
//! extracted key: same ordering, same handling of ties, nothing lost
//! or invented. The standard library's stable sort is the oracle.

use std::cmp::Reverse;

use boxoffice_reporting::engine::sort::{sort_by, SortOrder};
use proptest::prelude::*;

// ============================================================================
// Property Test Strategies
// ============================================================================

/// Generate keyed inputs with deliberate key collisions.
///
/// Keys are drawn from a ten-value range so most inputs contain ties;
/// the payload keeps colliding elements distinguishable.
fn keyed_pairs() -> impl Strategy<Value = Vec<(i64, u32)>> {
    prop::collection::vec((0i64..10, 0u32..1_000), 0..60)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: Ascending sort matches the standard stable sort
    ///
    /// Equality against the stable oracle pins down ordering,
    /// permutation, and tie preservation in one assertion.
    #[test]
    fn prop_ascending_matches_stable_oracle(pairs in keyed_pairs()) {
        let sorted = sort_by(pairs.clone(), |pair| pair.0, SortOrder::Ascending);

        let mut oracle = pairs;
        oracle.sort_by_key(|pair| pair.0);

        prop_assert_eq!(sorted, oracle, "ascending sort must match the stable oracle");
    }

    /// Property: Descending sort matches the standard stable sort
    #[test]
    fn prop_descending_matches_stable_oracle(pairs in keyed_pairs()) {
        let sorted = sort_by(pairs.clone(), |pair| pair.0, SortOrder::Descending);

        let mut oracle = pairs;
        oracle.sort_by_key(|pair| Reverse(pair.0));

        prop_assert_eq!(sorted, oracle, "descending sort must match the stable oracle");
    }

    /// Property: Sorting is idempotent
    #[test]
    fn prop_sort_is_idempotent(pairs in keyed_pairs()) {
        let once = sort_by(pairs, |pair| pair.0, SortOrder::Ascending);
        let twice = sort_by(once.clone(), |pair| pair.0, SortOrder::Ascending);

        prop_assert_eq!(twice, once, "sorting sorted input must change nothing");
    }

    /// Property: Adjacent elements respect the requested direction
    #[test]
    fn prop_adjacent_elements_ordered(pairs in keyed_pairs()) {
        let ascending = sort_by(pairs.clone(), |pair| pair.0, SortOrder::Ascending);
        for window in ascending.windows(2) {
            prop_assert!(window[0].0 <= window[1].0, "ascending neighbors must not decrease");
        }

        let descending = sort_by(pairs, |pair| pair.0, SortOrder::Descending);
        for window in descending.windows(2) {
            prop_assert!(window[0].0 >= window[1].0, "descending neighbors must not increase");
        }
    }

    /// Property: Descending keys are ascending keys reversed
    ///
    /// Only the key sequences mirror each other; within a tie run both
    /// directions keep input order, so the full elements need not.
    #[test]
    fn prop_direction_mirrors_key_sequence(pairs in keyed_pairs()) {
        let ascending_keys: Vec<i64> = sort_by(pairs.clone(), |pair| pair.0, SortOrder::Ascending)
            .into_iter()
            .map(|pair| pair.0)
            .collect();
        let descending_keys: Vec<i64> = sort_by(pairs, |pair| pair.0, SortOrder::Descending)
            .into_iter()
            .map(|pair| pair.0)
            .collect();

        let mut mirrored = ascending_keys;
        mirrored.reverse();
        prop_assert_eq!(descending_keys, mirrored, "direction flip must mirror the key sequence");
    }

    /// Property: Equal-key runs keep their input order
    #[test]
    fn prop_ties_keep_input_order(pairs in keyed_pairs()) {
        let sorted = sort_by(pairs.clone(), |pair| pair.0, SortOrder::Descending);

        for key in 0i64..10 {
            let input_order: Vec<u32> = pairs
                .iter()
                .filter(|pair| pair.0 == key)
                .map(|pair| pair.1)
                .collect();
            let output_order: Vec<u32> = sorted
                .iter()
                .filter(|pair| pair.0 == key)
                .map(|pair| pair.1)
                .collect();

            prop_assert_eq!(output_order, input_order, "tied elements must keep arrival order");
        }
    }
}

// ============================================================================
// Standard Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_descending_tie_keeps_listing_order() {
        let ranked = sort_by(
            vec![(1, 100), (2, 300), (3, 300)],
            |pair| pair.1,
            SortOrder::Descending,
        );
        assert_eq!(ranked, vec![(2, 300), (3, 300), (1, 100)]);
    }

    #[test]
    fn test_reverse_sorted_input_fully_reverses() {
        let sorted = sort_by(vec![5, 4, 3, 2, 1], |v| *v, SortOrder::Ascending);
        assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
    }
}

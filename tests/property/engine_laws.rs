// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for the Transformation Strategies
//!
//! Every strategy (eager, lazy, memoized, batched) must agree with
//! the plain eager rendition on all inputs. These tests pin that
//! agreement down, along with the cursor protocol laws the lazy and
//! batched strategies rely on.

use std::cell::Cell;
use std::collections::BTreeSet;
use std::sync::Arc;

use boxoffice_reporting::engine::composite::memo_lazy_filter;
use boxoffice_reporting::engine::memo::{memo_map, ComputationCache, MemoKey};
use boxoffice_reporting::engine::{batch, eager, lazy};
use boxoffice_reporting::engine::{Cursor, VecCursor};
use proptest::prelude::*;

// ============================================================================
// Property Test Strategies
// ============================================================================

/// Generate input vectors of bounded magnitude.
///
/// Small values keep the doubling fold in the batch laws well inside
/// i64 range.
fn small_vec() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-1_000i64..1_000, 0..50)
}

/// Generate batch sizes from the degenerate single-element chunk up.
fn batch_sizes() -> impl Strategy<Value = usize> {
    1usize..10
}

/// A fold that is neither commutative nor associative, so any batch
/// boundary placed wrongly changes the answer.
fn order_sensitive(accumulator: i64, value: i64) -> i64 {
    accumulator * 2 + value
}

// ============================================================================
// Eager Strategy Laws
// ============================================================================

proptest! {
    /// Property: Map preserves length and per-index correspondence
    #[test]
    fn prop_map_preserves_shape(values in small_vec()) {
        let mapped = eager::map(values.clone(), |v| v * 3);

        prop_assert_eq!(mapped.len(), values.len(), "map must not add or drop elements");
        for (index, value) in values.iter().enumerate() {
            prop_assert_eq!(
                mapped[index],
                value * 3,
                "element {} must be transformed in place",
                index
            );
        }
    }

    /// Property: Filter yields a subsequence whose elements all pass
    ///
    /// Every kept element satisfies the predicate and appears in the
    /// same relative order as the input.
    #[test]
    fn prop_filter_yields_passing_subsequence(values in small_vec()) {
        let kept = eager::filter(values.clone(), |v| *v >= 0);

        prop_assert!(kept.iter().all(|v| *v >= 0), "every kept element must pass the predicate");

        // subsequence check: consume input left to right
        let mut input = values.iter();
        for value in &kept {
            prop_assert!(
                input.any(|candidate| candidate == value),
                "kept elements must preserve input order"
            );
        }
    }

    /// Property: Reduce is a left fold from the initial value
    #[test]
    fn prop_reduce_is_left_fold(values in small_vec()) {
        let folded = eager::reduce(values.clone(), 7i64, order_sensitive);

        let expected = values.iter().fold(7i64, |acc, v| order_sensitive(acc, *v));
        prop_assert_eq!(folded, expected, "reduce must fold left with the given seed");
    }
}

// ============================================================================
// Lazy Strategy Laws
// ============================================================================

proptest! {
    /// Property: Lazy map equals eager map
    #[test]
    fn prop_lazy_map_equals_eager(values in small_vec()) {
        let lazy_result = lazy::map(VecCursor::new(values.clone()), |v| v * 3).into_vec();
        let eager_result = eager::map(values, |v| v * 3);

        prop_assert_eq!(lazy_result, eager_result, "pulling a map cursor dry must equal eager map");
    }

    /// Property: Lazy filter equals eager filter
    #[test]
    fn prop_lazy_filter_equals_eager(values in small_vec()) {
        let lazy_result = lazy::filter(VecCursor::new(values.clone()), |v| v % 2 == 0).into_vec();
        let eager_result = eager::filter(values, |v| v % 2 == 0);

        prop_assert_eq!(lazy_result, eager_result, "drained filter cursor must equal eager filter");
    }

    /// Property: Lazy reduce equals eager reduce
    #[test]
    fn prop_lazy_reduce_equals_eager(values in small_vec()) {
        let lazy_result = lazy::reduce(VecCursor::new(values.clone()), 7i64, order_sensitive);
        let eager_result = eager::reduce(values, 7i64, order_sensitive);

        prop_assert_eq!(lazy_result, eager_result, "cursor reduce must equal eager reduce");
    }

    /// Property: reduce_until folds exactly the shortest satisfying prefix
    ///
    /// The fold stops after the first combine whose accumulator meets
    /// the stop condition, so the result equals a manual scan that
    /// breaks at the same point.
    #[test]
    fn prop_reduce_until_stops_at_prefix(values in small_vec(), threshold in 0i64..2_000) {
        let result = lazy::reduce_until(
            VecCursor::new(values.clone()),
            0i64,
            |acc, v| acc + v,
            |acc| *acc >= threshold,
        );

        let mut expected = 0i64;
        for value in &values {
            expected += value;
            if expected >= threshold {
                break;
            }
        }
        prop_assert_eq!(result, expected, "fold must stop at the first satisfying accumulator");
    }
}

// ============================================================================
// Cursor Protocol Laws
// ============================================================================

proptest! {
    /// Property: Reset replays the identical sequence
    #[test]
    fn prop_reset_replays_sequence(values in small_vec()) {
        let mut cursor = VecCursor::new(values);

        let mut first_pass = Vec::new();
        while let Some(item) = cursor.next() {
            first_pass.push(item);
        }
        cursor.reset();
        let mut second_pass = Vec::new();
        while let Some(item) = cursor.next() {
            second_pass.push(item);
        }

        prop_assert_eq!(first_pass, second_pass, "reset must rewind to the full sequence");
    }

    /// Property: Exhaustion is sticky until reset
    #[test]
    fn prop_exhaustion_is_sticky(values in small_vec()) {
        let mut cursor = VecCursor::new(values);
        while cursor.next().is_some() {}

        prop_assert_eq!(cursor.next(), None, "an exhausted cursor must stay exhausted");
        prop_assert_eq!(cursor.next(), None, "repeated pulls must keep returning None");
    }

    /// Property: Reset also replays through adapter chains
    #[test]
    fn prop_reset_propagates_through_adapters(values in small_vec()) {
        let mut chain = lazy::filter(
            lazy::map(VecCursor::new(values), |v| v * 2),
            |v| *v >= 0,
        );

        let mut first_pass = Vec::new();
        while let Some(item) = chain.next() {
            first_pass.push(item);
        }
        chain.reset();
        let mut second_pass = Vec::new();
        while let Some(item) = chain.next() {
            second_pass.push(item);
        }

        prop_assert_eq!(first_pass, second_pass, "reset must reach the source through adapters");
    }
}

// ============================================================================
// Batched Strategy Laws
// ============================================================================

proptest! {
    /// Property: Batched map equals eager map for every chunk size
    #[test]
    fn prop_batch_map_equals_eager(values in small_vec(), size in batch_sizes()) {
        let batched = batch::batch_map(VecCursor::new(values.clone()), |v| v * 3, size).into_vec();
        let eager_result = eager::map(values, |v| v * 3);

        prop_assert_eq!(batched, eager_result, "chunking must not change map results");
    }

    /// Property: Batched filter equals eager filter for every chunk size
    ///
    /// Holds even when whole chunks are rejected; the cursor keeps
    /// pulling until something passes or the upstream is dry.
    #[test]
    fn prop_batch_filter_equals_eager(values in small_vec(), size in batch_sizes()) {
        let batched =
            batch::batch_filter(VecCursor::new(values.clone()), |v| v % 2 == 0, size).into_vec();
        let eager_result = eager::filter(values, |v| v % 2 == 0);

        prop_assert_eq!(batched, eager_result, "chunking must not change filter results");
    }

    /// Property: Batched reduce equals eager reduce for every chunk size
    ///
    /// The fold is order-sensitive, so this fails if the accumulator
    /// is ever restarted at a chunk boundary.
    #[test]
    fn prop_batch_reduce_equals_eager(values in small_vec(), size in batch_sizes()) {
        let batched = batch::batch_reduce(values.clone(), 7i64, order_sensitive, size);
        let eager_result = eager::reduce(values, 7i64, order_sensitive);

        prop_assert_eq!(batched, eager_result, "accumulator must thread across chunk boundaries");
    }
}

// ============================================================================
// Memoized Strategy Laws
// ============================================================================

proptest! {
    /// Property: Memoized map equals eager map
    ///
    /// With the element itself as the key, caching is invisible in the
    /// output even when the input holds duplicates.
    #[test]
    fn prop_memo_map_equals_eager(values in small_vec()) {
        let cache = ComputationCache::new();
        let expected = eager::map(values.clone(), |v| v * 3);
        let cached = memo_map(&cache, values, |v| MemoKey::from(*v), |v| v * 3);

        prop_assert_eq!(cached, expected, "caching must not change map results");
    }

    /// Property: Memoized map computes each key at most once
    #[test]
    fn prop_memo_map_computes_each_key_once(values in small_vec()) {
        let cache = ComputationCache::new();
        let computed = Cell::new(0usize);
        let distinct: BTreeSet<i64> = values.iter().copied().collect();

        memo_map(
            &cache,
            values,
            |v| MemoKey::from(*v),
            |v| {
                computed.set(computed.get() + 1);
                v * 3
            },
        );

        prop_assert_eq!(
            computed.get(),
            distinct.len(),
            "transform runs must equal distinct keys"
        );
    }

    /// Property: Memoized lazy filter equals eager filter
    #[test]
    fn prop_memo_lazy_filter_equals_eager(values in small_vec()) {
        let cache = Arc::new(ComputationCache::new());
        let cached = memo_lazy_filter(
            cache,
            VecCursor::new(values.clone()),
            |v| MemoKey::from(*v),
            |v| v % 2 == 0,
        )
        .into_vec();
        let eager_result = eager::filter(values, |v| v % 2 == 0);

        prop_assert_eq!(cached, eager_result, "verdict caching must not change filter results");
    }
}

// ============================================================================
// Standard Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_batch_reduce_sums_across_chunks() {
        let total = batch::batch_reduce(vec![1, 2, 3, 4, 5], 0i64, |acc, v| acc + v, 2);
        assert_eq!(total, 15);
    }

    #[test]
    fn test_batch_filter_skips_fully_rejected_chunks() {
        // first chunk [1, 2, 3] filters to nothing; the rest must still flow
        let kept =
            batch::batch_filter(VecCursor::new(vec![1, 2, 3, 4, 5, 6]), |v| *v > 3, 3).into_vec();
        assert_eq!(kept, vec![4, 5, 6]);
    }

    #[test]
    fn test_reduce_until_on_empty_returns_init() {
        let result = lazy::reduce_until(
            VecCursor::new(Vec::<i64>::new()),
            42i64,
            |acc, v| acc + v,
            |acc| *acc >= 0,
        );
        assert_eq!(result, 42);
    }

    #[test]
    fn test_memo_map_collapses_duplicates() {
        let cache = ComputationCache::new();
        let computed = Cell::new(0usize);

        let tripled = memo_map(
            &cache,
            vec![5, 5, 5, 7],
            |v| MemoKey::from(*v),
            |v| {
                computed.set(computed.get() + 1);
                v * 3
            },
        );

        assert_eq!(tripled, vec![15, 15, 15, 21]);
        assert_eq!(computed.get(), 2); // one run for 5, one for 7
    }
}

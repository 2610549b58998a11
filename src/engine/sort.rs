// Copyright (c) 2025 - Cowboy AI, Inc.
//! Key-extracting sort used to rank pipeline output.
//!
//! [`sort_by`] is a three-way quicksort: each round picks the middle
//! element's key as the pivot, splits the segment into
//! before / equal / after buckets, emits the equal run as-is, and
//! re-queues the outer buckets. Three-way partitioning collapses
//! duplicate keys in one round, which suits ranking data where many
//! rows share a revenue figure.
//!
//! Because every bucket preserves encounter order and equal runs are
//! emitted untouched, the sort is stable: rows with equal keys keep
//! the order the source listed them in. Descending order flips which
//! bucket a key lands in rather than reversing afterwards, so
//! stability holds for both directions.
//!
//! Pending segments live on an explicit work stack instead of the call
//! stack, so adversarial inputs degrade to the usual quicksort
//! O(n^2) time but never overflow the stack. Average time is
//! O(n log n); auxiliary space is O(n).

use std::cmp::Ordering;

/// Direction of a [`sort_by`] ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

enum Step<T> {
    /// Segment still needing a partition round.
    Sort(Vec<T>),
    /// Run of pivot-equal elements, already in final order.
    Emit(Vec<T>),
}

/// Sort `source` by the keys `key_fn` extracts.
///
/// Keys are recomputed per comparison, so extractors should be cheap
/// field reads. Equal-key elements keep their relative source order.
///
/// ```rust
/// use boxoffice_reporting::engine::sort::{sort_by, SortOrder};
///
/// let ranked = sort_by(vec![(1, 100), (2, 300), (3, 300)], |pair| pair.1, SortOrder::Descending);
/// assert_eq!(ranked, vec![(2, 300), (3, 300), (1, 100)]);
/// ```
pub fn sort_by<I, T, K, KF>(source: I, key_fn: KF, order: SortOrder) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    KF: Fn(&T) -> K,
    K: Ord,
{
    let elements: Vec<T> = source.into_iter().collect();
    if elements.len() <= 1 {
        return elements;
    }

    let mut sorted = Vec::with_capacity(elements.len());
    let mut pending = vec![Step::Sort(elements)];

    while let Some(step) = pending.pop() {
        match step {
            Step::Emit(run) => sorted.extend(run),
            Step::Sort(segment) => {
                if segment.len() <= 1 {
                    sorted.extend(segment);
                    continue;
                }

                let pivot_key = key_fn(&segment[segment.len() / 2]);
                let mut before = Vec::new();
                let mut equal = Vec::new();
                let mut after = Vec::new();

                for element in segment {
                    let towards_front = match key_fn(&element).cmp(&pivot_key) {
                        Ordering::Equal => {
                            equal.push(element);
                            continue;
                        }
                        Ordering::Less => order == SortOrder::Ascending,
                        Ordering::Greater => order == SortOrder::Descending,
                    };
                    if towards_front {
                        before.push(element);
                    } else {
                        after.push(element);
                    }
                }

                // popped last-in-first-out, so push in reverse of the
                // final before / equal / after output order
                pending.push(Step::Sort(after));
                pending.push(Step::Emit(equal));
                pending.push(Step::Sort(before));
            }
        }
    }

    sorted
}

// Copyright (c) 2025 - Cowboy AI, Inc.
//! Composite strategies: named blends of the base strategies.
//!
//! Two combinations come up often enough in the reporting pipelines to
//! deserve names: lazily-pulled batch mapping, and lazy filtering with
//! memoized verdicts. Both are thin layers over the base strategies,
//! so every ordering and equivalence law carries over unchanged.

use std::sync::Arc;

use super::batch::{self, BatchCursor};
use super::cursor::Cursor;
use super::memo::{ComputationCache, MemoKey, OperationTag};

/// Lazy batch map: chunked upstream pulls behind a lazy cursor.
///
/// This is [`batch::batch_map`] under a composite name; the cursor is
/// already lazy, so the combination adds nothing beyond intent.
///
/// # Panics
///
/// Panics if `batch_size` is zero.
pub fn lazy_batch_map<C, F, B>(source: C, transform: F, batch_size: usize) -> BatchCursor<C, F, B>
where
    C: Cursor,
    F: FnMut(C::Item) -> B,
{
    batch::batch_map(source, transform, batch_size)
}

/// Cursor combining lazy filtering with memoized predicate verdicts.
///
/// Verdicts are cached under [`OperationTag::LazyFilter`], so they
/// never collide with entries written by the eager memoized filter.
pub struct MemoFilterCursor<C, K, P> {
    upstream: C,
    cache: Arc<ComputationCache>,
    key_fn: K,
    predicate: P,
}

impl<C, K, P> Cursor for MemoFilterCursor<C, K, P>
where
    C: Cursor,
    K: FnMut(&C::Item) -> MemoKey,
    P: FnMut(&C::Item) -> bool,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        while let Some(item) = self.upstream.next() {
            let key = (self.key_fn)(&item);
            let keep = self
                .cache
                .get_or_compute(key, OperationTag::LazyFilter, || (self.predicate)(&item));
            if keep {
                return Some(item);
            }
        }
        None
    }

    fn reset(&mut self) {
        self.upstream.reset();
    }
}

/// Lazily filter `source`, caching each element's verdict in `cache`.
///
/// The key function must identify the element *and* everything the
/// predicate depends on: a threshold comparison, for example, needs
/// the threshold folded into the key or a later pass with a different
/// threshold would reuse stale verdicts.
pub fn memo_lazy_filter<C, K, P>(
    cache: Arc<ComputationCache>,
    source: C,
    key_fn: K,
    predicate: P,
) -> MemoFilterCursor<C, K, P>
where
    C: Cursor,
    K: FnMut(&C::Item) -> MemoKey,
    P: FnMut(&C::Item) -> bool,
{
    MemoFilterCursor {
        upstream: source,
        cache,
        key_fn,
        predicate,
    }
}

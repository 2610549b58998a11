// Copyright (c) 2025 - Cowboy AI, Inc.
//! Memoized evaluation strategy.
//!
//! A [`ComputationCache`] remembers the result of expensive per-element
//! work so repeated pipelines over the same inputs skip recomputation.
//! The cache is injected rather than global: each
//! [`crate::service::ReportingService`] owns one and shares it across
//! its query handlers, so independent services never observe each
//! other's entries.
//!
//! # Key design
//!
//! Entries are addressed by a [`CacheKey`] built from three parts:
//!
//! ```text
//! CacheKey = (result TypeId, caller MemoKey, OperationTag)
//! ```
//!
//! - the **result type** keeps a `bool` filter verdict from ever
//!   colliding with an aggregate of the same caller key,
//! - the **caller key** identifies the input (for the reporting
//!   pipelines, a `(theater id, date)` pair),
//! - the **operation tag** separates map, filter, and reduce entries
//!   computed from the same input.
//!
//! # Concurrency
//!
//! Lookups and inserts go through a sharded [`DashMap`]. A miss runs
//! the computation *outside* any shard lock so slow work cannot block
//! unrelated keys; when two callers race on the same key both may
//! compute, the first insert wins, and the loser adopts the stored
//! value. Entries are immutable once inserted.
//!
//! The cache is unbounded. That is an accepted trade for this sample:
//! the working set is one entry per (theater, date, operation) triple,
//! and [`ComputationCache::clear`] is the pressure valve if a caller
//! needs one.

use std::any::{Any, TypeId};
use std::sync::Arc;

use chrono::NaiveDate;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::debug;

use super::eager;

/// Caller-supplied portion of a cache key.
///
/// Conversions cover the shapes the reporting pipelines key on; pairs
/// nest, so `((id, date), threshold)` style composites work without a
/// dedicated variant.
///
/// ```rust
/// use boxoffice_reporting::engine::memo::MemoKey;
///
/// let key = MemoKey::from((42u32, "matinee"));
/// assert_eq!(key, MemoKey::from((42u32, "matinee")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MemoKey {
    Int(i64),
    Text(String),
    Date(NaiveDate),
    Pair(Box<MemoKey>, Box<MemoKey>),
}

impl From<i64> for MemoKey {
    fn from(value: i64) -> Self {
        MemoKey::Int(value)
    }
}

impl From<i32> for MemoKey {
    fn from(value: i32) -> Self {
        MemoKey::Int(i64::from(value))
    }
}

impl From<u32> for MemoKey {
    fn from(value: u32) -> Self {
        MemoKey::Int(i64::from(value))
    }
}

impl From<&str> for MemoKey {
    fn from(value: &str) -> Self {
        MemoKey::Text(value.to_string())
    }
}

impl From<String> for MemoKey {
    fn from(value: String) -> Self {
        MemoKey::Text(value)
    }
}

impl From<NaiveDate> for MemoKey {
    fn from(value: NaiveDate) -> Self {
        MemoKey::Date(value)
    }
}

impl<A, B> From<(A, B)> for MemoKey
where
    A: Into<MemoKey>,
    B: Into<MemoKey>,
{
    fn from((first, second): (A, B)) -> Self {
        MemoKey::Pair(Box::new(first.into()), Box::new(second.into()))
    }
}

/// Which engine operation produced a cached value.
///
/// Tagging keeps a filter verdict and a mapped value for the same
/// caller key in separate entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationTag {
    Map,
    Filter,
    Reduce,
    /// Filter verdicts cached by [`crate::engine::composite::memo_lazy_filter`].
    LazyFilter,
}

/// Full cache address: result type, caller key, and operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    result_type: TypeId,
    caller_key: MemoKey,
    operation: OperationTag,
}

impl CacheKey {
    /// Build the key for a computation producing an `R`.
    pub fn of<R: Any>(caller_key: MemoKey, operation: OperationTag) -> Self {
        Self {
            result_type: TypeId::of::<R>(),
            caller_key,
            operation,
        }
    }

    pub fn caller_key(&self) -> &MemoKey {
        &self.caller_key
    }

    pub fn operation(&self) -> OperationTag {
        self.operation
    }
}

/// Concurrent, injectable memoization cache.
///
/// Values are stored type-erased; the result `TypeId` inside each
/// [`CacheKey`] guarantees a lookup only ever sees values of the type
/// it asked for.
#[derive(Default)]
pub struct ComputationCache {
    entries: DashMap<CacheKey, Arc<dyn Any + Send + Sync>>,
}

impl ComputationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached value for `(caller_key, operation)`, computing
    /// and storing it on a miss.
    ///
    /// Racing callers may both run `compute`; exactly one result is
    /// stored and every caller returns a value equal to it.
    pub fn get_or_compute<R, F>(
        &self,
        caller_key: MemoKey,
        operation: OperationTag,
        compute: F,
    ) -> R
    where
        R: Any + Send + Sync + Clone,
        F: FnOnce() -> R,
    {
        let key = CacheKey::of::<R>(caller_key, operation);

        if let Some(entry) = self.entries.get(&key) {
            if let Some(value) = entry.value().downcast_ref::<R>() {
                return value.clone();
            }
        }

        // Miss: compute outside any shard lock so slow work cannot
        // block unrelated keys.
        debug!(?key, "computation cache miss");
        let computed = compute();

        match self.entries.entry(key) {
            // another caller inserted first; adopt its value
            Entry::Occupied(existing) => existing
                .get()
                .downcast_ref::<R>()
                .cloned()
                .unwrap_or(computed),
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(computed.clone()));
                computed
            }
        }
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every cached entry.
    pub fn clear(&self) {
        debug!(entries = self.entries.len(), "clearing computation cache");
        self.entries.clear();
    }
}

/// Memoized map: transform each element, consulting the cache per
/// element key.
///
/// The key function must identify the element: elements with equal
/// keys are assumed to map to equal results, and only the first is
/// actually transformed.
pub fn memo_map<I, B, K, F>(
    cache: &ComputationCache,
    source: I,
    mut key_fn: K,
    mut transform: F,
) -> Vec<B>
where
    I: IntoIterator,
    B: Any + Send + Sync + Clone,
    K: FnMut(&I::Item) -> MemoKey,
    F: FnMut(I::Item) -> B,
{
    eager::map(source, |item| {
        let key = key_fn(&item);
        cache.get_or_compute(key, OperationTag::Map, || transform(item))
    })
}

/// Memoized filter: the predicate verdict is cached per element key.
pub fn memo_filter<I, K, P>(
    cache: &ComputationCache,
    source: I,
    mut key_fn: K,
    mut predicate: P,
) -> Vec<I::Item>
where
    I: IntoIterator,
    K: FnMut(&I::Item) -> MemoKey,
    P: FnMut(&I::Item) -> bool,
{
    eager::filter(source, |item| {
        let key = key_fn(item);
        cache.get_or_compute(key, OperationTag::Filter, || predicate(item))
    })
}

/// Memoized reduce: the *entire fold* is cached under `identifier`.
///
/// The identifier must change whenever the source contents would: the
/// cache has no way to observe the elements themselves.
pub fn memo_reduce<I, A, K, F>(
    cache: &ComputationCache,
    source: I,
    identifier: K,
    init: A,
    combine: F,
) -> A
where
    I: IntoIterator,
    A: Any + Send + Sync + Clone,
    K: Into<MemoKey>,
    F: FnMut(A, I::Item) -> A,
{
    cache.get_or_compute(identifier.into(), OperationTag::Reduce, || {
        eager::reduce(source, init, combine)
    })
}

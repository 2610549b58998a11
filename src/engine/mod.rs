// Copyright (c) 2025 - Cowboy AI, Inc.
//! Functional transformation engine.
//!
//! Every reporting pipeline in this crate is assembled from three
//! primitive operations (map, filter, reduce) offered under four
//! interchangeable evaluation strategies. The operations always mean
//! the same thing; only *when* and *how often* work happens differs.
//!
//! # Architecture
//!
//! ```text
//!                  ┌─────────────────────────────────┐
//!                  │         Pipeline Author         │
//!                  └───────────────┬─────────────────┘
//!                                  │ picks a strategy
//!        ┌────────────┬────────────┼────────────┬──────────────┐
//!        ▼            ▼            ▼            ▼              ▼
//!    ┌────────┐  ┌────────┐  ┌─────────┐  ┌─────────┐  ┌───────────┐
//!    │ eager  │  │  lazy  │  │  memo   │  │  batch  │  │ composite │
//!    │ (Vec)  │  │(Cursor)│  │(DashMap)│  │ (chunk) │  │ (blends)  │
//!    └────────┘  └────────┘  └─────────┘  └─────────┘  └───────────┘
//!                     │            │
//!                     ▼            ▼
//!               [`cursor::Cursor`] [`memo::ComputationCache`]
//! ```
//!
//! # Strategy laws
//!
//! Switching strategies never changes the observable result:
//!
//! - `lazy::map(c, f)` drained to a `Vec` equals `eager::map(v, f)`
//!   over the same elements, and likewise for filter and reduce.
//! - `batch::batch_reduce(v, init, f, n)` equals `eager::reduce` for
//!   every batch size `n >= 1`, including non-associative combiners,
//!   because the accumulator is threaded across chunk boundaries.
//! - `memo::memo_map` equals `eager::map` whenever the key function is
//!   injective over the inputs actually seen.
//!
//! The property suite in `tests/property/` holds the strategies to
//! these laws.
//!
//! # Ordering
//!
//! All strategies preserve source order: map emits the transform of
//! element *i* at position *i*, filter keeps survivors in encounter
//! order, and reduce folds left-to-right. [`sort::sort_by`] is the
//! only operation that reorders, and it keeps equal-key runs in their
//! encounter order.

pub mod batch;
pub mod composite;
pub mod cursor;
pub mod eager;
pub mod lazy;
pub mod memo;
pub mod sort;

pub use batch::{BatchCursor, BatchFilterCursor, DEFAULT_BATCH_SIZE};
pub use composite::MemoFilterCursor;
pub use cursor::{Cursor, CursorState, Cursors, FnCursor, VecCursor};
pub use lazy::{FilterCursor, MapCursor};
pub use memo::{CacheKey, ComputationCache, MemoKey, OperationTag};
pub use sort::SortOrder;

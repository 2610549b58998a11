// Copyright (c) 2025 - Cowboy AI, Inc.
//! Lazy evaluation strategy.
//!
//! Map and filter return cursors that do no work until pulled, so a
//! pipeline over a large or infinite source only pays for the elements
//! a consumer actually requests. Reduce is the terminal operation that
//! drives the pull loop; [`reduce_until`] additionally stops as soon
//! as the accumulator satisfies a termination predicate, leaving the
//! rest of the source untouched.
//!
//! # Example
//!
//! ```rust
//! use boxoffice_reporting::engine::cursor::{Cursor, FnCursor};
//! use boxoffice_reporting::engine::lazy;
//!
//! // infinite naturals, squared lazily, summed until the total passes 50
//! let naturals = FnCursor::new(|n| Some(n as i64));
//! let squares = lazy::map(naturals, |n| n * n);
//! let total = lazy::reduce_until(squares, 0, |acc, n| acc + n, |acc| *acc > 50);
//! assert_eq!(total, 55); // 0+1+4+9+16+25
//! ```

use super::cursor::Cursor;

/// Cursor that transforms each upstream element on demand.
///
/// Lifecycle (start, exhaustion, reset) mirrors the upstream cursor;
/// the transform runs exactly once per pulled element.
pub struct MapCursor<C, F> {
    upstream: C,
    transform: F,
}

impl<C, F> MapCursor<C, F> {
    pub fn new(upstream: C, transform: F) -> Self {
        Self { upstream, transform }
    }
}

impl<C, F, B> Cursor for MapCursor<C, F>
where
    C: Cursor,
    F: FnMut(C::Item) -> B,
{
    type Item = B;

    fn next(&mut self) -> Option<B> {
        self.upstream.next().map(&mut self.transform)
    }

    fn reset(&mut self) {
        self.upstream.reset();
    }
}

/// Cursor that yields only the upstream elements satisfying a
/// predicate.
///
/// A single `next` call may advance the upstream several times while
/// it skips rejected elements, so upstream progress and downstream
/// progress are deliberately decoupled.
pub struct FilterCursor<C, P> {
    upstream: C,
    predicate: P,
}

impl<C, P> FilterCursor<C, P> {
    pub fn new(upstream: C, predicate: P) -> Self {
        Self { upstream, predicate }
    }
}

impl<C, P> Cursor for FilterCursor<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        while let Some(item) = self.upstream.next() {
            if (self.predicate)(&item) {
                return Some(item);
            }
        }
        None
    }

    fn reset(&mut self) {
        self.upstream.reset();
    }
}

/// Lazily transform each element of `source`.
pub fn map<C, F, B>(source: C, transform: F) -> MapCursor<C, F>
where
    C: Cursor,
    F: FnMut(C::Item) -> B,
{
    MapCursor::new(source, transform)
}

/// Lazily keep the elements of `source` satisfying `predicate`.
pub fn filter<C, P>(source: C, predicate: P) -> FilterCursor<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    FilterCursor::new(source, predicate)
}

/// Drain `source`, folding left-to-right from `init`.
///
/// Never returns on an infinite source; [`reduce_until`] is the
/// bounded alternative.
pub fn reduce<C, A, F>(mut source: C, init: A, mut combine: F) -> A
where
    C: Cursor,
    F: FnMut(A, C::Item) -> A,
{
    let mut accumulator = init;
    while let Some(item) = source.next() {
        accumulator = combine(accumulator, item);
    }
    accumulator
}

/// Fold until `should_stop` accepts the accumulator.
///
/// The predicate is checked after each combine; once it returns true
/// no further element is pulled from the source. This is the safe way
/// to reduce an infinite cursor.
pub fn reduce_until<C, A, F, P>(mut source: C, init: A, mut combine: F, mut should_stop: P) -> A
where
    C: Cursor,
    F: FnMut(A, C::Item) -> A,
    P: FnMut(&A) -> bool,
{
    let mut accumulator = init;
    while let Some(item) = source.next() {
        accumulator = combine(accumulator, item);
        if should_stop(&accumulator) {
            break;
        }
    }
    accumulator
}

// Copyright (c) 2025 - Cowboy AI, Inc.
//! Batched evaluation strategy.
//!
//! Elements are pulled from the upstream in fixed-size chunks and
//! processed a chunk at a time, then handed downstream one by one.
//! Chunking changes memory behavior only: for every batch size the
//! produced sequence is identical to the unbatched strategy, and the
//! reduce accumulator threads across chunk boundaries so even
//! non-associative combiners fold exactly as an unbatched reduce
//! would.
//!
//! The chunk buffer is allocated once per cursor and reused for every
//! refill.

use std::collections::VecDeque;

use super::cursor::{Cursor, CursorState};

/// Batch size used when callers have no reason to pick one.
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Cursor that maps upstream elements one chunk at a time.
pub struct BatchCursor<C: Cursor, F, B> {
    upstream: C,
    transform: F,
    batch_size: usize,
    chunk: Vec<C::Item>,
    ready: VecDeque<B>,
    state: CursorState,
}

impl<C, F, B> BatchCursor<C, F, B>
where
    C: Cursor,
    F: FnMut(C::Item) -> B,
{
    /// # Panics
    ///
    /// Panics if `batch_size` is zero; an empty chunk can make no
    /// progress.
    pub fn new(upstream: C, transform: F, batch_size: usize) -> Self {
        assert!(batch_size >= 1, "batch size must be at least 1");
        Self {
            upstream,
            transform,
            batch_size,
            chunk: Vec::with_capacity(batch_size),
            ready: VecDeque::new(),
            state: CursorState::NotStarted,
        }
    }

    /// Current lifecycle phase.
    pub fn state(&self) -> CursorState {
        self.state
    }

    fn refill(&mut self) {
        while self.chunk.len() < self.batch_size {
            match self.upstream.next() {
                Some(item) => self.chunk.push(item),
                None => break,
            }
        }
        for item in self.chunk.drain(..) {
            self.ready.push_back((self.transform)(item));
        }
    }
}

impl<C, F, B> Cursor for BatchCursor<C, F, B>
where
    C: Cursor,
    F: FnMut(C::Item) -> B,
{
    type Item = B;

    fn next(&mut self) -> Option<B> {
        if self.state == CursorState::Exhausted {
            return None;
        }
        if self.ready.is_empty() {
            self.refill();
        }
        match self.ready.pop_front() {
            Some(item) => {
                self.state = CursorState::Running;
                Some(item)
            }
            None => {
                self.state = CursorState::Exhausted;
                None
            }
        }
    }

    fn reset(&mut self) {
        self.upstream.reset();
        self.chunk.clear();
        self.ready.clear();
        self.state = CursorState::NotStarted;
    }
}

/// Cursor that filters upstream elements one chunk at a time.
pub struct BatchFilterCursor<C: Cursor, P> {
    upstream: C,
    predicate: P,
    batch_size: usize,
    chunk: Vec<C::Item>,
    ready: VecDeque<C::Item>,
    state: CursorState,
}

impl<C, P> BatchFilterCursor<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    /// # Panics
    ///
    /// Panics if `batch_size` is zero.
    pub fn new(upstream: C, predicate: P, batch_size: usize) -> Self {
        assert!(batch_size >= 1, "batch size must be at least 1");
        Self {
            upstream,
            predicate,
            batch_size,
            chunk: Vec::with_capacity(batch_size),
            ready: VecDeque::new(),
            state: CursorState::NotStarted,
        }
    }

    /// Current lifecycle phase.
    pub fn state(&self) -> CursorState {
        self.state
    }

    fn refill(&mut self) {
        // A chunk whose elements are all rejected must not end the
        // sequence while the upstream still has elements, so keep
        // pulling chunks until one survives or the upstream is dry.
        while self.ready.is_empty() {
            while self.chunk.len() < self.batch_size {
                match self.upstream.next() {
                    Some(item) => self.chunk.push(item),
                    None => break,
                }
            }
            if self.chunk.is_empty() {
                return;
            }
            for item in self.chunk.drain(..) {
                if (self.predicate)(&item) {
                    self.ready.push_back(item);
                }
            }
        }
    }
}

impl<C, P> Cursor for BatchFilterCursor<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        if self.state == CursorState::Exhausted {
            return None;
        }
        if self.ready.is_empty() {
            self.refill();
        }
        match self.ready.pop_front() {
            Some(item) => {
                self.state = CursorState::Running;
                Some(item)
            }
            None => {
                self.state = CursorState::Exhausted;
                None
            }
        }
    }

    fn reset(&mut self) {
        self.upstream.reset();
        self.chunk.clear();
        self.ready.clear();
        self.state = CursorState::NotStarted;
    }
}

/// Map `source` in chunks of `batch_size`.
pub fn batch_map<C, F, B>(source: C, transform: F, batch_size: usize) -> BatchCursor<C, F, B>
where
    C: Cursor,
    F: FnMut(C::Item) -> B,
{
    BatchCursor::new(source, transform, batch_size)
}

/// Filter `source` in chunks of `batch_size`.
pub fn batch_filter<C, P>(source: C, predicate: P, batch_size: usize) -> BatchFilterCursor<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    BatchFilterCursor::new(source, predicate, batch_size)
}

/// Reduce `source` chunk by chunk, threading the accumulator across
/// chunk boundaries.
///
/// The final partial chunk folds like any other, so the result equals
/// an unbatched [`super::eager::reduce`] for every `batch_size`.
///
/// # Panics
///
/// Panics if `batch_size` is zero.
pub fn batch_reduce<I, A, F>(source: I, init: A, mut combine: F, batch_size: usize) -> A
where
    I: IntoIterator,
    F: FnMut(A, I::Item) -> A,
{
    assert!(batch_size >= 1, "batch size must be at least 1");
    let mut accumulator = init;
    let mut chunk = Vec::with_capacity(batch_size);
    for item in source {
        chunk.push(item);
        if chunk.len() == batch_size {
            for buffered in chunk.drain(..) {
                accumulator = combine(accumulator, buffered);
            }
        }
    }
    for buffered in chunk.drain(..) {
        accumulator = combine(accumulator, buffered);
    }
    accumulator
}

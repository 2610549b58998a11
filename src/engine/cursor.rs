// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pull-based cursor protocol underlying the lazy strategies.
//!
//! A [`Cursor`] is a resettable pull sequence: each call to
//! [`Cursor::next`] produces the next element or reports exhaustion,
//! and [`Cursor::reset`] rewinds the whole chain back to the start.
//! Adapters own their upstream cursor, so dropping the outermost
//! cursor releases the entire chain.
//!
//! # Lifecycle
//!
//! ```text
//!             next() -> Some              next() -> None
//! NotStarted ───────────────► Running ───────────────► Exhausted
//!     ▲  │ next() -> None                                 │
//!     │  └────────────────────────────────────────────►───┤
//!     └──────────────────────── reset() ──────────────────┘
//! ```
//!
//! Exhaustion is sticky: once a cursor has returned `None` it keeps
//! returning `None` until `reset` is called, even if the element
//! source could technically produce again.
//!
//! # Example
//!
//! ```rust
//! use boxoffice_reporting::engine::cursor::{Cursor, VecCursor};
//!
//! let mut cursor = VecCursor::new(vec![10, 20]);
//! assert_eq!(cursor.next(), Some(10));
//! assert_eq!(cursor.next(), Some(20));
//! assert_eq!(cursor.next(), None);
//! assert_eq!(cursor.next(), None); // stays exhausted
//!
//! cursor.reset();
//! assert_eq!(cursor.next(), Some(10));
//! ```

/// Lifecycle phase of a cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// `next` has not been called since construction or the last reset.
    NotStarted,
    /// At least one element has been produced.
    Running,
    /// The source reported end-of-sequence; sticky until reset.
    Exhausted,
}

/// A resettable pull sequence.
///
/// Unlike [`Iterator`], a cursor can be rewound with [`Cursor::reset`]
/// and then replays the sequence from the beginning. Resource release
/// is plain ownership: adapters own their upstream, so `Drop` tears
/// down the chain exactly once no matter how it is nested.
pub trait Cursor {
    /// Element type produced by this cursor.
    type Item;

    /// Advance and produce the next element, or `None` when exhausted.
    ///
    /// After the first `None`, every further call returns `None` until
    /// [`Cursor::reset`].
    fn next(&mut self) -> Option<Self::Item>;

    /// Rewind to the start of the sequence, resetting the whole
    /// upstream chain.
    fn reset(&mut self);

    /// Bridge into a [`std::iter::Iterator`] that drains this cursor.
    fn into_iter(self) -> Cursors<Self>
    where
        Self: Sized,
    {
        Cursors { cursor: self }
    }

    /// Drain every remaining element into a `Vec`.
    fn into_vec(self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        self.into_iter().collect()
    }
}

/// Iterator adapter returned by [`Cursor::into_iter`].
pub struct Cursors<C> {
    cursor: C,
}

impl<C: Cursor> Iterator for Cursors<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next()
    }
}

/// Cursor over an owned `Vec`, yielding clones of its elements.
///
/// The vector is kept so that [`Cursor::reset`] can replay it.
#[derive(Debug, Clone)]
pub struct VecCursor<T> {
    items: Vec<T>,
    position: usize,
    state: CursorState,
}

impl<T> VecCursor<T> {
    /// Create a cursor positioned before the first element.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            position: 0,
            state: CursorState::NotStarted,
        }
    }

    /// Current lifecycle phase.
    pub fn state(&self) -> CursorState {
        self.state
    }
}

impl<T: Clone> Cursor for VecCursor<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.state == CursorState::Exhausted {
            return None;
        }
        match self.items.get(self.position) {
            Some(item) => {
                self.position += 1;
                self.state = CursorState::Running;
                Some(item.clone())
            }
            None => {
                self.state = CursorState::Exhausted;
                None
            }
        }
    }

    fn reset(&mut self) {
        self.position = 0;
        self.state = CursorState::NotStarted;
    }
}

impl<T> From<Vec<T>> for VecCursor<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

/// Cursor driven by a position-indexed generator function.
///
/// The generator receives the zero-based position of the element being
/// requested and returns `Some` to produce or `None` to end the
/// sequence. Because elements are derived from the position, `reset`
/// only has to rewind the position counter. Infinite sequences are
/// fine; consumers bound them with a filter, a terminating reduce, or
/// [`Iterator::take`] on the bridged iterator.
///
/// ```rust
/// use boxoffice_reporting::engine::cursor::{Cursor, FnCursor};
///
/// let squares = FnCursor::new(|n| Some((n as i64) * (n as i64)));
/// let first: Vec<i64> = squares.into_iter().take(4).collect();
/// assert_eq!(first, vec![0, 1, 4, 9]);
/// ```
#[derive(Debug, Clone)]
pub struct FnCursor<F> {
    generate: F,
    position: usize,
    state: CursorState,
}

impl<F> FnCursor<F> {
    /// Create a cursor that asks `generate` for each position in turn.
    pub fn new(generate: F) -> Self {
        Self {
            generate,
            position: 0,
            state: CursorState::NotStarted,
        }
    }

    /// Current lifecycle phase.
    pub fn state(&self) -> CursorState {
        self.state
    }
}

impl<F, T> Cursor for FnCursor<F>
where
    F: FnMut(usize) -> Option<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.state == CursorState::Exhausted {
            return None;
        }
        match (self.generate)(self.position) {
            Some(item) => {
                self.position += 1;
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
        self.position = 0;
        self.state = CursorState::NotStarted;
    }
}

// Copyright (c) 2025 - Cowboy AI, Inc.
//! Eager evaluation strategy.
//!
//! Each operation walks its whole input immediately and materializes
//! the answer: map and filter produce a `Vec`, reduce produces the
//! final accumulator. This is the strategy to reach for when the
//! result is consumed in full anyway, which is what the query handlers
//! in [`crate::queries`] do.
//!
//! # Example
//!
//! ```rust
//! use boxoffice_reporting::engine::eager;
//!
//! let doubled = eager::map(vec![1, 2, 3], |n| n * 2);
//! assert_eq!(doubled, vec![2, 4, 6]);
//!
//! let evens = eager::filter(vec![1, 2, 3, 4], |n| n % 2 == 0);
//! assert_eq!(evens, vec![2, 4]);
//!
//! let sum = eager::reduce(vec![1, 2, 3, 4], 0, |acc, n| acc + n);
//! assert_eq!(sum, 10);
//! ```

/// Transform every element, preserving length and order.
pub fn map<I, B, F>(source: I, transform: F) -> Vec<B>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> B,
{
    source.into_iter().map(transform).collect()
}

/// Keep the elements satisfying `predicate`, in encounter order.
pub fn filter<I, P>(source: I, mut predicate: P) -> Vec<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    source.into_iter().filter(|item| predicate(item)).collect()
}

/// Fold the elements left-to-right starting from `init`.
///
/// An empty source returns `init` unchanged.
pub fn reduce<I, A, F>(source: I, init: A, mut combine: F) -> A
where
    I: IntoIterator,
    F: FnMut(A, I::Item) -> A,
{
    let mut accumulator = init;
    for item in source {
        accumulator = combine(accumulator, item);
    }
    accumulator
}

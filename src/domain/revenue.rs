// Copyright (c) 2025 - Cowboy AI, Inc.
//! Money as a scaled integer.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// A monetary amount in whole cents.
///
/// Revenue arithmetic is integer arithmetic: summing per-sale amounts
/// into daily totals is exact, and comparison is plain integer
/// ordering. Negative values are representable (the type also carries
/// differences); [`TheaterPerformanceResult`] is where non-negativity
/// is enforced.
///
/// Serializes as the bare cent count.
///
/// [`TheaterPerformanceResult`]: crate::domain::TheaterPerformanceResult
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Revenue(i64);

impl Revenue {
    /// No revenue at all; the identity for summation.
    pub const ZERO: Revenue = Revenue(0);

    pub const fn from_cents(cents: i64) -> Self {
        Revenue(cents)
    }

    pub const fn from_dollars(dollars: i64) -> Self {
        Revenue(dollars * 100)
    }

    pub const fn cents(&self) -> i64 {
        self.0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

impl Add for Revenue {
    type Output = Revenue;

    fn add(self, rhs: Revenue) -> Revenue {
        Revenue(self.0 + rhs.0)
    }
}

impl Sum for Revenue {
    fn sum<I: Iterator<Item = Revenue>>(iter: I) -> Revenue {
        iter.fold(Revenue::ZERO, Add::add)
    }
}

impl fmt::Display for Revenue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let cents = self.0.abs();
        write!(f, "{sign}${}.{:02}", cents / 100, cents % 100)
    }
}

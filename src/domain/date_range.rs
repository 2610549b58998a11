// Copyright (c) 2025 - Cowboy AI, Inc.
//! Inclusive calendar spans.

use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised by [`DateRange`] construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    /// Start date falls after the end date.
    #[error("invalid date range: start {start} is after end {end}")]
    StartAfterEnd { start: NaiveDate, end: NaiveDate },
}

/// An inclusive span of calendar dates.
///
/// Both endpoints belong to the range; a range where start equals end
/// covers exactly one day. The constructor is the only way to build
/// one, so every `DateRange` in circulation satisfies
/// `start <= end`.
///
/// ```rust
/// use boxoffice_reporting::domain::DateRange;
/// use chrono::NaiveDate;
///
/// let july = DateRange::new(
///     NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 7, 31).unwrap(),
/// )?;
/// assert_eq!(july.total_days(), 31);
/// assert!(july.contains(NaiveDate::from_ymd_opt(2024, 7, 4).unwrap()));
/// # Ok::<(), boxoffice_reporting::domain::DateRangeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Build a range; rejects `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if start > end {
            return Err(DateRangeError::StartAfterEnd { start, end });
        }
        Ok(Self { start, end })
    }

    /// Single-day range.
    pub fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether `date` lies within the range, endpoints included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of days covered, counting both endpoints.
    pub fn total_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

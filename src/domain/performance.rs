// Copyright (c) 2025 - Cowboy AI, Inc.
//! Read-model output types built by the reporting pipelines.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Revenue, Theater};

/// Errors raised while building read-model rows.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PerformanceError {
    /// A result row would carry negative total revenue.
    #[error("negative revenue of {cents} cents for theater {theater}")]
    NegativeRevenue { theater: String, cents: i64 },
}

/// Result type for read-model row construction.
pub type PerformanceResult<T> = Result<T, PerformanceError>;

/// Working total for one theater while a pipeline is aggregating.
///
/// Unvalidated on purpose: intermediate sums may pass through any
/// value, and only the conversion into [`TheaterPerformanceResult`]
/// enforces the read model's invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TheaterSalesAggregate {
    pub theater: Theater,
    pub total_sales: Revenue,
}

impl TheaterSalesAggregate {
    pub fn new(theater: Theater, total_sales: Revenue) -> Self {
        Self {
            theater,
            total_sales,
        }
    }
}

/// One row of a reporting answer: a theater and its total revenue,
/// optionally pinned to the date the total covers.
///
/// Construction rejects negative revenue, so consumers can render any
/// row they are handed without re-checking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TheaterPerformanceResult {
    theater: Theater,
    total_revenue: Revenue,
    performance_date: Option<NaiveDate>,
}

impl TheaterPerformanceResult {
    pub fn new(
        theater: Theater,
        total_revenue: Revenue,
        performance_date: Option<NaiveDate>,
    ) -> PerformanceResult<Self> {
        if total_revenue.is_negative() {
            return Err(PerformanceError::NegativeRevenue {
                theater: theater.name,
                cents: total_revenue.cents(),
            });
        }
        Ok(Self {
            theater,
            total_revenue,
            performance_date,
        })
    }

    /// Convert an aggregate into a result row, enforcing the revenue
    /// invariant.
    pub fn from_aggregate(
        aggregate: TheaterSalesAggregate,
        performance_date: Option<NaiveDate>,
    ) -> PerformanceResult<Self> {
        Self::new(aggregate.theater, aggregate.total_sales, performance_date)
    }

    pub fn theater(&self) -> &Theater {
        &self.theater
    }

    pub fn total_revenue(&self) -> Revenue {
        self.total_revenue
    }

    pub fn performance_date(&self) -> Option<NaiveDate> {
        self.performance_date
    }
}

impl fmt::Display for TheaterPerformanceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.performance_date {
            Some(date) => write!(f, "{}: {} on {date}", self.theater.name, self.total_revenue),
            None => write!(f, "{}: {}", self.theater.name, self.total_revenue),
        }
    }
}

// Copyright (c) 2025 - Cowboy AI, Inc.
//! Reporting queries and their handlers.
//!
//! Three read-side questions, each answered by a pipeline of engine
//! operations over the sales store:
//!
//! - [`GetTheatersByDateQuery`] - every theater's total for one date
//! - [`GetTopPerformingTheatersQuery`] - the best N theaters over a range
//! - [`GetUnderperformingTheatersQuery`] - theaters at or below a threshold
//!
//! Every handler ranks by total revenue descending, converts
//! aggregates into validated [`TheaterPerformanceResult`] rows, and
//! publishes a completion event on the bus. The by-date and
//! underperforming handlers share per-`(theater, date)` aggregation
//! work through the service's [`ComputationCache`].
//!
//! [`TheaterPerformanceResult`]: crate::domain::TheaterPerformanceResult
//! [`ComputationCache`]: crate::engine::memo::ComputationCache

mod by_date;
mod top_performing;
mod underperforming;

pub use by_date::{GetTheatersByDateQuery, TheatersByDateHandler};
pub use top_performing::{GetTopPerformingTheatersQuery, TopPerformingTheatersHandler};
pub use underperforming::{GetUnderperformingTheatersQuery, UnderperformingTheatersHandler};

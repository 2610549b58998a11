// Copyright (c) 2025 - Cowboy AI, Inc.
//! Box-office domain model.
//!
//! Plain records for the catalog side (theaters, movies, sales) and
//! validated value objects for everything the read side hands back to
//! callers.
//!
//! # Value Objects with Invariants
//!
//! - [`Revenue`] - money as whole cents, exact under summation
//! - [`DateRange`] - inclusive calendar span, start never after end
//! - [`TheaterPerformanceResult`] - read-model row, revenue never negative
//!
//! # Records
//!
//! - [`Theater`], [`Movie`], [`Sale`] - the catalog rows queries run over
//! - [`TheaterSalesAggregate`] - per-theater total built by the pipelines

pub mod date_range;
pub mod performance;
pub mod revenue;
pub mod sales;

pub use date_range::{DateRange, DateRangeError};
pub use performance::{PerformanceError, TheaterPerformanceResult, TheaterSalesAggregate};
pub use revenue::Revenue;
pub use sales::{Movie, Sale, Theater};

// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for boxoffice-reporting
//!
//! Provides deterministic sales data for the reporting pipeline tests.
//! All dates and amounts are fixed constants so every run reports the
//! same numbers.
//!
//! # Design Principles
//! - All test data is deterministic (no clocks, no randomness)
//! - Fixtures are the ONLY place that builds ad-hoc stores
//! - Tests use fixtures, never direct construction

use chrono::NaiveDate;

use boxoffice_reporting::domain::{DateRange, Movie, Revenue, Sale, Theater};
use boxoffice_reporting::store::TheaterSalesStore;

/// Build a calendar date from literal parts.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("Invalid date in test fixture")
}

/// Build an inclusive date range from literal parts.
pub fn range(start: NaiveDate, end: NaiveDate) -> DateRange {
    DateRange::new(start, end).expect("Invalid range in test fixture")
}

/// Whole-dollar revenue.
pub fn dollars(amount: i64) -> Revenue {
    Revenue::from_dollars(amount)
}

/// A theater with the given listing id.
pub fn theater(id: u32, name: &str) -> Theater {
    Theater::new(id, name)
}

/// A ticket sale for the fixture feature (movie id 1).
pub fn sale(id: u32, theater_id: u32, sale_date: NaiveDate, amount_dollars: i64) -> Sale {
    Sale::new(id, theater_id, 1, sale_date, dollars(amount_dollars))
}

/// The single screening date used by [`tie_heavy_store`].
pub fn tie_date() -> NaiveDate {
    date(2024, 8, 16)
}

/// Three theaters where two gross identical totals on [`tie_date`].
///
/// Rankings over this store expose tie handling: Orpheum and Paramount
/// both take $300, so a stable descending sort must keep Orpheum (the
/// earlier listing) first.
pub fn tie_heavy_store() -> TheaterSalesStore {
    TheaterSalesStore::new(
        vec![
            theater(1, "Rialto"),
            theater(2, "Orpheum"),
            theater(3, "Paramount"),
        ],
        vec![Movie::new(1, "Feature Presentation")],
        vec![
            sale(1, 1, tie_date(), 100),
            sale(2, 2, tie_date(), 300),
            sale(3, 3, tie_date(), 300),
        ],
    )
}

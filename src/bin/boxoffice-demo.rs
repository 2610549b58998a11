// Copyright (c) 2025 - Cowboy AI, Inc.
//! Box Office Reporting Demo
//!
//! Walks the seeded sample season through every registered query:
//! daily revenue ranking, top performers over a range, and the
//! underperformance report, with completion events logged as they
//! arrive on the bus.
//!
//! Run with: cargo run --bin boxoffice-demo
//!
//! Set RUST_LOG=debug to watch the handlers and cache at work.

use anyhow::{anyhow, Result};
use boxoffice_reporting::domain::{DateRange, Revenue};
use boxoffice_reporting::events::{
    DomainEvent, TheaterPerformanceQueriedEvent, TopTheatersQueriedEvent,
};
use boxoffice_reporting::store::seed_dates;
use boxoffice_reporting::ReportingService;
use chrono::NaiveDate;
use tracing::info;

fn day(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| anyhow!("invalid date {year}-{month:02}-{day:02}"))
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("🚀 Starting Box Office Reporting Demo");

    // Wire the service around the seeded season
    let service = ReportingService::seeded()?;
    info!("📋 Seeded season loaded:");
    info!("  - Theaters: {}", service.store().theaters().len());
    info!("  - Movies: {}", service.store().movies().len());
    info!("  - Sales records: {}", service.store().sales().len());
    for name in service.registered_query_names() {
        info!("  - Query: {}", name);
    }

    // Watch completion events as the queries run
    info!("👂 Subscribing to completion events");
    service
        .event_bus()
        .subscribe(|event: &TheaterPerformanceQueriedEvent| {
            info!(
                "📨 {} on {}: {} theaters, best grossed {}",
                event.event_type(),
                event.date,
                event.theater_count,
                event.highest_revenue
            );
        });
    service
        .event_bus()
        .subscribe(|event: &TopTheatersQueriedEvent| {
            info!(
                "📨 {} over {} to {}: asked for {}, returned {}",
                event.event_type(),
                event.start_date,
                event.end_date,
                event.top_count,
                event.result_count
            );
        });

    // Daily ranking for the busiest day of the season
    let holiday = seed_dates::independence_day();
    info!("🎬 Revenue by theater on {}", holiday);
    for row in service.theaters_by_date(holiday)? {
        info!("  - {}", row);
    }

    // Top three across all of July
    let july = DateRange::new(day(2024, 7, 1)?, day(2024, 7, 31)?)?;
    info!("🏆 Top 3 theaters for {}", july);
    for row in service.top_performing(july, 3)? {
        info!("  - {}", row);
    }

    // Underperformance check on a day with no screenings
    let quiet = seed_dates::quiet_day();
    info!("📉 Theaters at or below {} on {}", Revenue::ZERO, quiet);
    for row in service.underperforming(quiet, Revenue::ZERO)? {
        info!("  - {}", row);
    }

    // Single best theater for the holiday
    match service.find_highest_sales_theater(holiday)? {
        Some(theater) => info!("⭐ Highest sales on {}: {}", holiday, theater.name),
        None => info!("⭐ No sales recorded on {}", holiday),
    }

    info!("📊 Cache holds {} memoized entries", service.cache().len());
    info!("✅ Demo complete");

    Ok(())
}

// Copyright (c) 2025 - Cowboy AI, Inc.
//! Domain events announced by the reporting pipelines.
//!
//! Events record that a query was answered and what the headline
//! numbers were; they carry no row data. Each event owns a v7 UUID
//! (time-ordered) and a UTC timestamp assigned at construction, plus a
//! stable type tag for logs.
//!
//! The structs serialize with serde so they could cross a process
//! boundary later without changing shape; today they only travel the
//! in-memory bus.

use chrono::{DateTime, Utc};
use uuid::Uuid;

mod reporting;

pub use reporting::{TheaterPerformanceQueriedEvent, TopTheatersQueriedEvent};

/// Common surface of every event published on the bus.
pub trait DomainEvent: Send + Sync + 'static {
    /// Stable type tag, e.g. `"TheaterPerformanceQueried"`.
    fn event_type(&self) -> &'static str;

    /// When the event was created (UTC).
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Identity of this event instance.
    fn event_id(&self) -> Uuid;
}

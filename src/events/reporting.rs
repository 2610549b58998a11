// Copyright (c) 2025 - Cowboy AI, Inc.
//! Events emitted after each reporting query completes.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Revenue;

use super::DomainEvent;

/// A single-date performance query (by-date or underperforming)
/// finished.
///
/// `highest_revenue` is the best total among the returned rows; the
/// underperforming pipeline reports zero here since its rows are at or
/// below a threshold by definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TheaterPerformanceQueriedEvent {
    /// Unique event id (UUIDv7, time-ordered)
    pub event_id: Uuid,
    /// When the event was created
    pub occurred_at: DateTime<Utc>,
    /// Calendar date the query covered
    pub date: NaiveDate,
    /// How many theater rows the query returned
    pub theater_count: usize,
    /// Largest total revenue among the returned rows
    pub highest_revenue: Revenue,
}

impl TheaterPerformanceQueriedEvent {
    pub const EVENT_TYPE: &'static str = "TheaterPerformanceQueried";

    pub fn new(date: NaiveDate, theater_count: usize, highest_revenue: Revenue) -> Self {
        Self {
            event_id: Uuid::now_v7(),
            occurred_at: Utc::now(),
            date,
            theater_count,
            highest_revenue,
        }
    }
}

impl DomainEvent for TheaterPerformanceQueriedEvent {
    fn event_type(&self) -> &'static str {
        Self::EVENT_TYPE
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    fn event_id(&self) -> Uuid {
        self.event_id
    }
}

/// A top-performing-theaters query finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopTheatersQueriedEvent {
    /// Unique event id (UUIDv7, time-ordered)
    pub event_id: Uuid,
    /// When the event was created
    pub occurred_at: DateTime<Utc>,
    /// First date of the queried range
    pub start_date: NaiveDate,
    /// Last date of the queried range
    pub end_date: NaiveDate,
    /// How many rows the caller asked for
    pub top_count: usize,
    /// How many rows the query actually returned
    pub result_count: usize,
}

impl TopTheatersQueriedEvent {
    pub const EVENT_TYPE: &'static str = "TopTheatersQueried";

    pub fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        top_count: usize,
        result_count: usize,
    ) -> Self {
        Self {
            event_id: Uuid::now_v7(),
            occurred_at: Utc::now(),
            start_date,
            end_date,
            top_count,
            result_count,
        }
    }
}

impl DomainEvent for TopTheatersQueriedEvent {
    fn event_type(&self) -> &'static str {
        Self::EVENT_TYPE
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    fn event_id(&self) -> Uuid {
        self.event_id
    }
}

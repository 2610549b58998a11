// Copyright (c) 2025 - Cowboy AI, Inc.
//! Catalog records the reporting queries run over.
//!
//! These are plain data rows with no invariants of their own; the
//! validated types live in [`super::performance`] and
//! [`super::revenue`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Revenue;

/// A theater venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theater {
    pub id: u32,
    pub name: String,
}

impl Theater {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A film shown at one or more theaters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u32,
    pub title: String,
}

impl Movie {
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

/// Ticket revenue booked for one movie at one theater on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    pub id: u32,
    pub theater_id: u32,
    pub movie_id: u32,
    pub sale_date: NaiveDate,
    pub amount: Revenue,
}

impl Sale {
    pub fn new(
        id: u32,
        theater_id: u32,
        movie_id: u32,
        sale_date: NaiveDate,
        amount: Revenue,
    ) -> Self {
        Self {
            id,
            theater_id,
            movie_id,
            sale_date,
            amount,
        }
    }
}

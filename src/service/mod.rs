// Copyright (c) 2025 - Cowboy AI, Inc.
//! Application service layer for box-office reporting.
//!
//! # Architecture
//!
//! ```text
//! Caller
//!     ↓
//! ReportingService (this module)
//!     ↓
//! QueryDispatcher → QueryHandler → transformation engine
//!     ↓                                  ↓
//! InMemoryEventBus ←── completion events ┘
//! ```
//!
//! The service owns the shared pieces every handler needs: the sales
//! store, the memoization cache, and the event bus. Handlers receive
//! them at registration time and stay free of wiring concerns.
//!
//! # Example
//!
//! ```rust,ignore
//! use boxoffice_reporting::ReportingService;
//!
//! let service = ReportingService::seeded()?;
//! let rows = service.theaters_by_date(date)?;
//! for row in rows {
//!     println!("{row}");
//! }
//! ```

pub mod reporting;

pub use reporting::ReportingService;

//! Box-office reporting over a CQRS query side.
//!
//! This crate answers theater revenue questions through typed queries
//! routed by a [`cqrs::QueryDispatcher`]. Handlers build their answers
//! from the map/filter/reduce strategies in [`engine`] (eager, lazy
//! cursors, memoized, and batched) and announce completion on an
//! in-memory event bus.
//!
//! [`ReportingService`] wires the pieces together; [`store`] carries a
//! seeded season of sales data to report over.

pub mod cqrs;
pub mod domain;
pub mod engine;
pub mod errors;
pub mod events;
pub mod queries;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use errors::{ReportingError, ReportingResult};
pub use service::ReportingService;

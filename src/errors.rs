//! Error types for reporting operations

use thiserror::Error;

use crate::cqrs::DispatchError;
use crate::domain::date_range::DateRangeError;
use crate::domain::performance::PerformanceError;

/// Errors that can occur while answering reporting queries
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReportingError {
    /// Date range validation error
    #[error("Date range error: {0}")]
    DateRange(#[from] DateRangeError),

    /// Read-model row validation error
    #[error("Performance result error: {0}")]
    Performance(#[from] PerformanceError),

    /// Query routing error
    #[error("Dispatch error: {0}")]
    Dispatch(#[from] DispatchError),
}

/// Result type for reporting operations
pub type ReportingResult<T> = Result<T, ReportingError>;

//! Structured error types for dashboard operations.
//!
//! The lenient policy never produces these: unknown labels fall back to the
//! default table rows and an inverted range yields an empty series. They are
//! raised only when the caller opts into strict validation.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    #[error("invalid date range: start {start} is after end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("unknown strategy '{0}'")]
    UnknownStrategy(String),

    #[error("unknown asset symbol '{0}'")]
    UnknownAsset(String),
}

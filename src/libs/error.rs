//! Validation errors for timeline view parameters.
//!
//! The timeline pipeline itself never fails: unparseable timestamps and
//! inconsistent records degrade to sentinels. Errors only arise when a caller
//! hands in view parameters that make the grid meaningless.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimelineError {
    #[error("Slot interval must be a positive number of minutes, got {0}")]
    InvalidInterval(i64),

    #[error("Padding must not be negative, got {before} before and {after} after")]
    InvalidPadding { before: i64, after: i64 },

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}

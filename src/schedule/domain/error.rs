//! Error types for schedule domain validation.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors returned while constructing domain schedule values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScheduleDomainError {
    /// The schedule name is empty after trimming.
    #[error("schedule name must not be empty")]
    EmptyName,

    /// The end date precedes the start date.
    #[error("schedule period is inverted: starts {start}, ends {end}")]
    InvertedPeriod {
        /// Requested start of the period.
        start: DateTime<Utc>,
        /// Requested end of the period.
        end: DateTime<Utc>,
    },
}

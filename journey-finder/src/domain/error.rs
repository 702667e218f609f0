//! Domain error types.
//!
//! These errors represent validation failures in timetable data. They are
//! distinct from storage and transport errors.

use super::TimeError;

/// Domain-level errors for validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A train must call at least one station
    #[error("train {0} has an empty route")]
    EmptyRoute(String),

    /// A stop's departure time is not a valid HH:mm time
    #[error("invalid departure time at {station}: {source}")]
    InvalidTime {
        station: String,
        #[source]
        source: TimeError,
    },
}

//! Input-malformation errors.
//!
//! These are the only failures the core treats as fatal. Model infeasibility
//! is not an error — it is a normal [`crate::response::OptimizationResponse`]
//! carrying `unachievableItems`.

use thiserror::Error;

/// An unrecoverable problem with the request, caught by [`crate::optimize::optimize`]
/// and converted into the fatal-response shape rather than propagated to the
/// caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OptimizeError {
    #[error("Invalid time format: {0}")]
    InvalidTimeFormat(String),

    #[error("Invalid schedule date: {0}")]
    InvalidScheduleDate(String),

    #[error("Duplicate activity id: {0}")]
    DuplicateActivityId(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_time_format_display() {
        let e = OptimizeError::InvalidTimeFormat("nope".to_string());
        assert_eq!(e.to_string(), "Invalid time format: nope");
    }

    #[test]
    fn duplicate_activity_id_display() {
        let e = OptimizeError::DuplicateActivityId("V701".to_string());
        assert_eq!(e.to_string(), "Duplicate activity id: V701");
    }
}

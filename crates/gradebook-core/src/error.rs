//! Roster error types.
//!
//! Every fallible roster or student operation reports one of these
//! variants so callers can classify failures without string matching.
//! All of them are recoverable at the caller boundary.

use thiserror::Error;

/// Errors raised by student construction, grade recording, and roster
/// operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RosterError {
    /// A required text field was empty or whitespace-only.
    #[error("{field} must not be empty")]
    BlankField {
        /// Name of the offending field (e.g. "name", "subject").
        field: &'static str,
    },

    /// A score was NaN or infinite.
    #[error("score must be a finite number")]
    ScoreNotFinite,

    /// A score fell outside the accepted 0-100 range.
    #[error("score {score} is out of range (expected 0-100)")]
    ScoreOutOfRange { score: f64 },

    /// An add was attempted with an ID that is already registered.
    #[error("student ID '{0}' is already registered")]
    DuplicateId(String),

    /// An operation referenced an ID that is not in the roster.
    #[error("no student with ID '{0}'")]
    NotFound(String),
}

impl RosterError {
    /// Returns `true` if this error was caused by malformed input rather
    /// than roster membership.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            RosterError::BlankField { .. }
                | RosterError::ScoreNotFinite
                | RosterError::ScoreOutOfRange { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification() {
        assert!(RosterError::BlankField { field: "name" }.is_validation());
        assert!(RosterError::ScoreNotFinite.is_validation());
        assert!(RosterError::ScoreOutOfRange { score: 150.0 }.is_validation());
        assert!(!RosterError::DuplicateId("S001".into()).is_validation());
        assert!(!RosterError::NotFound("S001".into()).is_validation());
    }

    #[test]
    fn display_names_the_offender() {
        let err = RosterError::DuplicateId("S001".into());
        assert_eq!(err.to_string(), "student ID 'S001' is already registered");

        let err = RosterError::BlankField { field: "subject" };
        assert_eq!(err.to_string(), "subject must not be empty");
    }
}

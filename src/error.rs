//! Error types for crewplan.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use crate::graph::{CycleError, ValidationError};
use thiserror::Error;

/// Main error type for crewplan operations.
///
/// Each variant maps to a specific exit code so that CI callers can branch
/// on the failure kind without parsing stderr.
#[derive(Error, Debug)]
pub enum CrewError {
    /// User provided invalid arguments, an unreadable file, or a malformed input.
    #[error("{0}")]
    UserError(String),

    /// Structural validation of a team failed.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The task graph contains a dependency cycle.
    #[error("{0}")]
    Cycle(#[from] CycleError),

    /// Aggregation concluded the team is NO-GO.
    #[error("Team is NO-GO: {0}")]
    Gate(String),
}

impl CrewError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            CrewError::UserError(_) => exit_codes::USER_ERROR,
            CrewError::Validation(_) => exit_codes::VALIDATION_FAILURE,
            CrewError::Cycle(_) => exit_codes::CYCLE_FAILURE,
            CrewError::Gate(_) => exit_codes::NO_GO,
        }
    }
}

/// Result type alias for crewplan operations.
pub type Result<T> = std::result::Result<T, CrewError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = CrewError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn validation_error_has_correct_exit_code() {
        let err = CrewError::Validation(ValidationError::new("tasks", "team has no tasks"));
        assert_eq!(err.exit_code(), exit_codes::VALIDATION_FAILURE);
    }

    #[test]
    fn cycle_error_has_correct_exit_code() {
        let err = CrewError::Cycle(CycleError::new(vec!["a".to_string(), "b".to_string()]));
        assert_eq!(err.exit_code(), exit_codes::CYCLE_FAILURE);
    }

    #[test]
    fn gate_error_has_correct_exit_code() {
        let err = CrewError::Gate("2 task(s) failed".to_string());
        assert_eq!(err.exit_code(), exit_codes::NO_GO);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = CrewError::Validation(ValidationError::new("manager", "manager is required"));
        assert_eq!(
            err.to_string(),
            "Validation failed: invalid team: manager: manager is required"
        );

        let err = CrewError::Gate("task build failed".to_string());
        assert_eq!(err.to_string(), "Team is NO-GO: task build failed");
    }
}

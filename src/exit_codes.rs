//! Exit code constants for the crewplan CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable or malformed files)
//! - 2: Validation failure (structural team errors, lint errors)
//! - 3: Cycle detected in the task graph
//! - 4: Team aggregated to NO-GO

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable files, or malformed input.
pub const USER_ERROR: i32 = 1;

/// Validation failure: structural team invariant violated or lint errors found.
pub const VALIDATION_FAILURE: i32 = 2;

/// Cycle failure: the task dependency graph is not acyclic.
pub const CYCLE_FAILURE: i32 = 3;

/// The team report aggregated to NO-GO.
pub const NO_GO: i32 = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, VALIDATION_FAILURE, CYCLE_FAILURE, NO_GO];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn exit_codes_are_stable() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(USER_ERROR, 1);
        assert_eq!(VALIDATION_FAILURE, 2);
        assert_eq!(CYCLE_FAILURE, 3);
        assert_eq!(NO_GO, 4);
    }
}

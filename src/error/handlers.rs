//! Error handlers
//!
//! Maps gate errors and outcomes to process exit codes.

use crate::auth::Outcome;
use crate::error::types::GateError;
use log::error;

/// Exit code for a granted session
pub const EXIT_GRANTED: i32 = 0;
/// Exit code once the attempt budget is exhausted
pub const EXIT_DENIED: i32 = 1;
/// Exit code for configuration or console failures
pub const EXIT_FAILURE: i32 = 2;

/// Handle a gate error
pub fn handle_error(err: &GateError) {
    error!("Credential gate error: {}", err);
}

/// Convert an outcome to a process exit code
pub fn outcome_to_exit_code(outcome: Outcome) -> i32 {
    match outcome {
        Outcome::Granted => EXIT_GRANTED,
        Outcome::Denied => EXIT_DENIED,
    }
}

/// Convert an error to a process exit code
pub fn error_to_exit_code(err: &GateError) -> i32 {
    match err {
        GateError::Auth(_) => EXIT_DENIED,
        GateError::Config(_) => EXIT_FAILURE,
        GateError::IoError(_) => EXIT_FAILURE,
    }
}

/// Log the error and return the exit code for it
pub fn exit_code(err: &GateError) -> i32 {
    handle_error(err);
    error_to_exit_code(err)
}

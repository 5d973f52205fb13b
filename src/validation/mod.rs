//! Input validation for scheduling requests.
//!
//! This module rejects malformed payloads before graph construction. Anything
//! that passes here is guaranteed a best-effort schedule: graph-level
//! conflicts (cycles, dangling dependencies) are handled by the engine and
//! reported as warnings, never as validation failures.

mod constants;
mod schedule;

pub use constants::MAX_TITLE_LENGTH;
pub use schedule::validate_schedule_request;

/// Validation error with details about what failed. Serialized into the
/// `details` array of 400 responses as a `{field, message}` object.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of validation - either Ok or a list of errors.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

//! Error types for the timetable engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the engine can surface. Scheduling conflicts are not
//! errors; they are returned as ordinary values in a
//! [`ConflictReport`](crate::models::ConflictReport).

use thiserror::Error;

/// The main error type for the timetable engine.
///
/// # Example
///
/// ```
/// use timetable_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/scheduler.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/scheduler.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds values the engine cannot use.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// A day, start time or end time outside the weekly grid.
    #[error("Invalid slot {field} '{value}': {message}")]
    InvalidSlot {
        /// Which part of the slot was invalid (day, start_time, end_time).
        field: String,
        /// The value supplied by the caller.
        value: String,
        /// A description of the problem.
        message: String,
    },

    /// The backing store could not answer a lookup.
    #[error("Store lookup failed for {query}: {message}")]
    LookupFailed {
        /// The lookup that failed.
        query: String,
        /// The underlying failure.
        message: String,
    },

    /// The store refused a session or calendar event that breaks a
    /// uniqueness invariant.
    #[error("Constraint '{constraint}' violated at {slot} for '{entity}'")]
    ConstraintViolation {
        /// Name of the violated constraint.
        constraint: String,
        /// The contested slot or date, e.g. "Monday 09:00".
        slot: String,
        /// The entity already holding it.
        entity: String,
    },

    /// No session with the given id exists.
    #[error("Scheduled session not found: {id}")]
    SessionNotFound {
        /// The id that was looked up.
        id: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/scheduler.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/scheduler.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_field() {
        let error = EngineError::InvalidConfig {
            field: "workload.max_weekly_hours".to_string(),
            message: "must be greater than zero".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration value 'workload.max_weekly_hours': must be greater than zero"
        );
    }

    #[test]
    fn test_invalid_slot_displays_field_and_value() {
        let error = EngineError::InvalidSlot {
            field: "day".to_string(),
            value: "Saturday".to_string(),
            message: "not a teaching day".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid slot day 'Saturday': not a teaching day"
        );
    }

    #[test]
    fn test_lookup_failed_displays_query() {
        let error = EngineError::LookupFailed {
            query: "sessions for faculty 'F1'".to_string(),
            message: "connection reset".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Store lookup failed for sessions for faculty 'F1': connection reset"
        );
    }

    #[test]
    fn test_constraint_violation_displays_slot() {
        let error = EngineError::ConstraintViolation {
            constraint: "uq_classroom_slot".to_string(),
            slot: "Monday 09:00".to_string(),
            entity: "R101".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Constraint 'uq_classroom_slot' violated at Monday 09:00 for 'R101'"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_lookup_failed() -> EngineResult<()> {
            Err(EngineError::LookupFailed {
                query: "all sessions".to_string(),
                message: "timeout".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_lookup_failed()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}

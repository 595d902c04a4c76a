//! # Error Types
//!
//! Structured error types for axial_core. Input problems are reported as a
//! complete list of messages so a caller can show every violation at once;
//! anything the arithmetic itself trips over is a separate, fatal kind.
//!
//! ## Example
//!
//! ```rust
//! use axial_core::errors::{CalcError, CalcResult};
//!
//! fn check_phi(phi: f64) -> CalcResult<()> {
//!     if !(phi > 0.0 && phi <= 1.0) {
//!         return Err(CalcError::invalid_input(
//!             "phi",
//!             phi.to_string(),
//!             "Strength reduction factor must be in (0, 1]",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_phi(0.65).is_ok());
//! assert_eq!(check_phi(1.5).unwrap_err().error_code(), "INVALID_INPUT");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for axial_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A single input value is invalid (out of range, not a number, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// One or more validation rules failed. Every message is kept, in rule order.
    #[error("Input validation failed: {}", .messages.join("; "))]
    ValidationFailed { messages: Vec<String> },

    /// A derived quantity left its physical domain even though the inputs
    /// validated. Never expected in practice.
    #[error("Domain error: {quantity} = {value} - {reason}")]
    Domain {
        quantity: String,
        value: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a ValidationFailed error from validator messages
    pub fn validation_failed(messages: Vec<String>) -> Self {
        CalcError::ValidationFailed { messages }
    }

    /// Create a Domain error
    pub fn domain(quantity: impl Into<String>, value: f64, reason: impl Into<String>) -> Self {
        CalcError::Domain {
            quantity: quantity.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError { reason: reason.into() }
    }

    /// Messages suitable for listing to the user, one per line.
    pub fn messages(&self) -> Vec<String> {
        match self {
            CalcError::ValidationFailed { messages } => messages.clone(),
            other => vec![other.to_string()],
        }
    }

    /// Check if this is a recoverable error (the user can fix the input and resubmit)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CalcError::ValidationFailed { .. } | CalcError::InvalidInput { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::ValidationFailed { .. } => "VALIDATION_FAILED",
            CalcError::Domain { .. } => "DOMAIN_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::validation_failed(vec![
            "Axial Load must be > 0 kN".to_string(),
            "Load factor γ should be ≥ 1.0".to_string(),
        ]);
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"ValidationFailed\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::validation_failed(vec![]).error_code(), "VALIDATION_FAILED");
        assert_eq!(CalcError::domain("phiPn", 0.0, "must be positive").error_code(), "DOMAIN_ERROR");
        assert_eq!(CalcError::serialization("bad").error_code(), "SERIALIZATION_ERROR");
        assert_eq!(CalcError::invalid_input("load", "x", "bad").error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_validation_is_recoverable_domain_is_not() {
        assert!(CalcError::validation_failed(vec!["x".to_string()]).is_recoverable());
        assert!(!CalcError::domain("phiPn", -1.0, "must be positive").is_recoverable());
    }

    #[test]
    fn test_json_errors_become_serialization_errors() {
        let err: CalcError = serde_json::from_str::<f64>("not json").unwrap_err().into();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_messages_keep_every_entry() {
        let error = CalcError::validation_failed(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(error.messages(), vec!["a", "b"]);
        assert_eq!(error.to_string(), "Input validation failed: a; b");

        let domain = CalcError::domain("phiPn", 0.0, "must be positive");
        assert_eq!(domain.messages(), vec!["Domain error: phiPn = 0 - must be positive"]);
    }
}

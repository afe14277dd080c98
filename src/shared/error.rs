//! Shared Error Types
//!
//! This module defines errors raised while interpreting values that arrive
//! over the wire, before any backend work is attempted.
//!
//! # Error Categories
//!
//! - `ValidationError` - A field could not be interpreted (e.g. a non-numeric id)
//! - `MissingField` - A required field was empty
//!
//! # Usage
//!
//! ```rust
//! use domunity::shared::error::SharedError;
//!
//! let error = SharedError::validation("building_id", "must be a positive integer");
//! assert!(error.to_string().contains("building_id"));
//! ```
use thiserror::Error;

/// Errors raised while interpreting caller-supplied values
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Invalid {field}: {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// A required field was empty
    #[error("Missing {field}")]
    MissingField {
        /// The field that was empty
        field: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new missing-field error
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            Self::ValidationError { field, .. } => field,
            Self::MissingField { field } => field,
        }
    }
}

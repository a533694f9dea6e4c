//! Core error types for wayfare-core

use thiserror::Error;

/// A validation failure on a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Name of the offending field
    pub field: String,
    /// Human-readable description of the problem
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Errors that can occur in domain operations
#[derive(Error, Debug, Clone)]
pub enum CoreError {
    /// One or more fields failed validation
    #[error("validation failed: {}", format_fields(.0))]
    Validation(Vec<FieldError>),

    /// Status string does not name a known listing status
    #[error("unknown listing status: {0}")]
    UnknownStatus(String),
}

fn format_fields(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

//! Application layer errors.
//!
//! These errors represent a rejected operation, not a faulty check. The
//! validator itself never fails; the service turns a non-empty violation
//! list into [`ApplicationError::ValidationFailed`].

use serde::Serialize;
use thiserror::Error;

use crate::domain::{ErrorCode, ValidationError};
use crate::error::ErrorCategory;

/// Errors that occur while gating a create/update.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The input broke one or more field rules; nothing was changed.
    #[error("Validation failed: {}", join(errors))]
    ValidationFailed { errors: Vec<ValidationError> },
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ValidationFailed { errors } => errors
                .iter()
                .map(|e| format!("{}: {}", e.field.label(), e.message))
                .collect(),
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ValidationFailed { .. } => ErrorCategory::Validation,
        }
    }

    /// Machine-readable code for API clients.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::ValidationFailed { .. } => ErrorCode::ValidationError,
        }
    }

    /// Structured body for a client-facing error response.
    pub fn payload(&self) -> ErrorPayload {
        match self {
            Self::ValidationFailed { errors } => ErrorPayload {
                code: self.error_code(),
                message: "Validation failed".into(),
                errors: errors.clone(),
            },
        }
    }
}

/// Serializable error body: `{ code, message, errors: [{field, message}] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorPayload {
    pub code: ErrorCode,
    pub message: String,
    pub errors: Vec<ValidationError>,
}

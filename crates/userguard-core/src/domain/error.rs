use thiserror::Error;

use crate::domain::value_objects::Field;
use crate::error::ErrorCategory;

/// Root domain error type.
///
/// Field violations are never errors: the validator returns them as data.
/// This type only covers values that cannot be interpreted at all.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("unknown error code: {0}")]
    UnknownErrorCode(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownField(name) => {
                let known: Vec<&str> = Field::ALL.iter().map(Field::as_str).collect();
                vec![
                    format!("'{name}' is not a validated field"),
                    format!("Known fields: {}", known.join(", ")),
                ]
            }
            Self::UnknownErrorCode(_) => vec![
                "Error codes are upper snake case, e.g. VALIDATION_ERROR".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownField(_) | Self::UnknownErrorCode(_) => ErrorCategory::Unrecognized,
        }
    }
}

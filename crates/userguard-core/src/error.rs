//! Unified error handling for userguard core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for userguard core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserGuardError {
    /// Errors from the domain layer (uninterpretable values).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (rejected operations).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl UserGuardError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }

    /// The field violations, if this is a rejected create/update.
    pub fn validation_errors(&self) -> Option<&[crate::domain::ValidationError]> {
        match self {
            Self::Application(ApplicationError::ValidationFailed { errors }) => Some(errors.as_slice()),
            _ => None,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A record broke one or more field rules.
    Validation,
    /// A name (field, error code) that matches nothing known.
    Unrecognized,
}

/// Convenient result type alias.
pub type UserGuardResult<T> = Result<T, UserGuardError>;

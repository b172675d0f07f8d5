//! Domain value objects: `Field` and `ErrorCode`.
//!
//! Pure value types: `Copy`, equality-by-value, no identity. Each one owns its
//! wire representation (`as_str`) and its `FromStr` parser.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Field ────────────────────────────────────────────────────────────────────

/// A user-input field the validator checks.
///
/// Declaration order is check order; the validator reports violations in
/// this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Email,
    FirstName,
    LastName,
    Bio,
}

impl Field {
    /// All checked fields, in check order.
    pub const ALL: [Self; 4] = [Self::Email, Self::FirstName, Self::LastName, Self::Bio];

    /// Wire name, as used in JSON records and error payloads.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Bio => "bio",
        }
    }

    /// Human label for prompts and tables.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Bio => "Bio",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(Self::Email),
            "firstName" | "first_name" | "first-name" => Ok(Self::FirstName),
            "lastName" | "last_name" | "last-name" => Ok(Self::LastName),
            "bio" => Ok(Self::Bio),
            other => Err(DomainError::UnknownField(other.to_owned())),
        }
    }
}

// ── ErrorCode ────────────────────────────────────────────────────────────────

/// Machine-readable error codes surfaced to API clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ValidationError,
    NotFound,
    DuplicateEntry,
    Unauthorized,
    Forbidden,
    InternalError,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::NotFound => "NOT_FOUND",
            Self::DuplicateEntry => "DUPLICATE_ENTRY",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "VALIDATION_ERROR" => Ok(Self::ValidationError),
            "NOT_FOUND" => Ok(Self::NotFound),
            "DUPLICATE_ENTRY" => Ok(Self::DuplicateEntry),
            "UNAUTHORIZED" => Ok(Self::Unauthorized),
            "FORBIDDEN" => Ok(Self::Forbidden),
            "INTERNAL_ERROR" => Ok(Self::InternalError),
            other => Err(DomainError::UnknownErrorCode(other.to_owned())),
        }
    }
}

//! Application layer for userguard.
//!
//! This layer contains:
//! - **Services**: use case orchestration (`UserService`)
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! validation rules itself. All rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{UserService, ValidationReport};

// Re-export port traits (for adapter implementation)
pub use ports::{Clock, SystemClock};

pub use error::{ApplicationError, ErrorPayload};

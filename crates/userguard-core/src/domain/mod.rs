//! Core domain layer for userguard.
//!
//! Pure logic only:
//!
//! - **No async**: everything is synchronous
//! - **No I/O**: no filesystem, network, or clock access
//! - **Stateless checks**: the validator holds nothing between calls
//! - **Shared constants**: every bound lives in [`constants`]
//!
// Public API - what the world sees
pub mod common;
pub mod constants;
pub mod entities;
pub mod error;
pub mod validation;
pub mod value_objects;

// Re-exports for convenience
pub use common::{capitalize, truncate_text};
pub use entities::{CreateUserInput, UpdateUserInput, User};
pub use error::DomainError;
pub use validation::{
    ValidationError, is_valid_email, is_valid_name, validate_create_input, validate_update_input,
};
pub use value_objects::{ErrorCode, Field};

//! userguard Core - shared user-input validation
//!
//! This crate holds the rules a user record must satisfy and the gate that
//! enforces them. The same functions back a server-side create/update path
//! and a client-side form, so both sides always agree.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         userguard-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (UserService: create/update/check)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │              (Clock)                    │
//! └──────────────────┬──────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (constants, validation, inputs, User)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use userguard_core::domain::{CreateUserInput, Field, validate_create_input};
//!
//! let input = CreateUserInput::new("bad", "J", "Doe");
//! let errors = validate_create_input(&input);
//!
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors[0].field, Field::Email);
//! assert_eq!(errors[1].field, Field::FirstName);
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, Clock, ErrorPayload, SystemClock, UserService, ValidationReport,
    };
    pub use crate::domain::{
        CreateUserInput, ErrorCode, Field, UpdateUserInput, User, ValidationError,
        is_valid_email, is_valid_name, validate_create_input, validate_update_input,
    };
    pub use crate::error::{UserGuardError, UserGuardResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "create a user" or "check a form".

pub mod user_service;

pub use user_service::{UserService, ValidationReport};

//! User Service - the validation gate in front of create/update.
//!
//! Two paths use it:
//! 1. The server path calls [`UserService::create`] / [`UserService::update`]:
//!    a non-empty violation list rejects the operation as a whole.
//! 2. The form path calls [`UserService::check_create`] /
//!    [`UserService::check_update`] to render inline errors; these never fail.

use serde::Serialize;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::{
    application::{ApplicationError, ports::Clock},
    domain::{
        CreateUserInput, UpdateUserInput, User, ValidationError, validate_create_input,
        validate_update_input,
    },
    error::UserGuardResult,
};

/// Outcome of a non-blocking check, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// Validates user input and builds or patches [`User`] records.
pub struct UserService {
    clock: Box<dyn Clock>,
}

impl UserService {
    /// Create a new user service with the given clock.
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Validate `input` and build a new active user.
    ///
    /// Either every field passes and a user is returned, or the operation is
    /// rejected with the complete violation list.
    #[instrument(skip_all)]
    pub fn create(&self, input: CreateUserInput) -> UserGuardResult<User> {
        reject_if_invalid(validate_create_input(&input))?;

        let user = User::from_input(input, Uuid::new_v4(), self.clock.now());
        info!(id = %user.id, "User created");
        Ok(user)
    }

    /// Validate `patch` and apply it to `user`.
    #[instrument(skip_all, fields(id = %user.id))]
    pub fn update(&self, user: User, patch: UpdateUserInput) -> UserGuardResult<User> {
        reject_if_invalid(validate_update_input(&patch))?;

        if patch.is_empty() {
            debug!("Empty patch; only updated_at changes");
        }
        let user = user.apply(patch, self.clock.now());
        info!("User updated");
        Ok(user)
    }

    /// Check a creation record without acting on it.
    pub fn check_create(&self, input: &CreateUserInput) -> ValidationReport {
        ValidationReport::from_errors(validate_create_input(input))
    }

    /// Check an update patch without acting on it.
    pub fn check_update(&self, patch: &UpdateUserInput) -> ValidationReport {
        ValidationReport::from_errors(validate_update_input(patch))
    }
}

fn reject_if_invalid(errors: Vec<ValidationError>) -> UserGuardResult<()> {
    if errors.is_empty() {
        return Ok(());
    }
    debug!(count = errors.len(), "Validation failed");
    Err(ApplicationError::ValidationFailed { errors }.into())
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::application::ports::output::MockClock;
    use crate::domain::{ErrorCode, Field};

    fn service_at(year: i32) -> UserService {
        let mut clock = MockClock::new();
        clock
            .expect_now()
            .returning(move || Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap());
        UserService::new(Box::new(clock))
    }

    fn valid_input() -> CreateUserInput {
        CreateUserInput::new("a@b.com", "John", "Doe")
    }

    #[test]
    fn create_builds_user_with_clock_time() {
        let user = service_at(2024).create(valid_input()).unwrap();

        assert_eq!(user.email, "a@b.com");
        assert!(user.is_active);
        assert_eq!(user.created_at, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        assert_ne!(user.id, Uuid::nil());
    }

    #[test]
    fn create_ids_are_unique() {
        let service = service_at(2024);
        let a = service.create(valid_input()).unwrap();
        let b = service.create(valid_input()).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn create_rejects_with_every_violation() {
        let mut clock = MockClock::new();
        clock.expect_now().never();
        let service = UserService::new(Box::new(clock));

        let err = service
            .create(CreateUserInput::new("bad", "J", "Doe"))
            .unwrap_err();

        let fields: Vec<Field> = err
            .validation_errors()
            .unwrap()
            .iter()
            .map(|e| e.field)
            .collect();
        assert_eq!(fields, vec![Field::Email, Field::FirstName]);
    }

    #[test]
    fn update_applies_patch_and_bumps_timestamp() {
        let user = service_at(2024).create(valid_input()).unwrap();
        let patched = service_at(2025)
            .update(
                user.clone(),
                UpdateUserInput {
                    bio: Some("short bio".into()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(patched.id, user.id);
        assert_eq!(patched.bio.as_deref(), Some("short bio"));
        assert_eq!(patched.created_at, user.created_at);
        assert!(patched.updated_at > user.updated_at);
    }

    #[test]
    fn update_rejects_explicit_empty_email() {
        let user = service_at(2024).create(valid_input()).unwrap();
        let err = service_at(2025)
            .update(
                user,
                UpdateUserInput {
                    email: Some(String::new()),
                    ..Default::default()
                },
            )
            .unwrap_err();

        assert_eq!(err.validation_errors().map(<[_]>::len), Some(1));
    }

    #[test]
    fn check_reports_without_failing() {
        let service = service_at(2024);
        let report = service.check_create(&CreateUserInput::new("bad", "John", "Doe"));
        assert!(!report.valid);
        assert_eq!(report.errors.len(), 1);

        assert!(service.check_update(&UpdateUserInput::default()).valid);
    }

    #[test]
    fn rejection_payload_is_structured() {
        let err = ApplicationError::ValidationFailed {
            errors: vec![ValidationError::for_field(Field::Bio)],
        };
        let payload = err.payload();
        assert_eq!(payload.code, ErrorCode::ValidationError);
        assert_eq!(payload.message, "Validation failed");

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["errors"][0]["field"], "bio");
    }
}

//! Field validation for user input.
//!
//! Both entry points run every check in a fixed order (email, firstName,
//! lastName, bio) and collect all violations in one pass. Nothing here ever
//! fails: a violation is a [`ValidationError`] in the returned list, and an
//! empty list means the input is acceptable.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::{
    constants::{BIO_MAX_LENGTH, EMAIL_PATTERN, NAME_MAX_LENGTH, NAME_MIN_LENGTH},
    entities::{CreateUserInput, UpdateUserInput},
    value_objects::Field,
};

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex pattern"));

/// A single field violation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: Field,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// The canonical violation for `field`.
    pub fn for_field(field: Field) -> Self {
        let message = match field {
            Field::Email => "Please enter a valid email address".to_owned(),
            Field::FirstName => {
                format!("First name must be between {NAME_MIN_LENGTH} and {NAME_MAX_LENGTH} characters")
            }
            Field::LastName => {
                format!("Last name must be between {NAME_MIN_LENGTH} and {NAME_MAX_LENGTH} characters")
            }
            Field::Bio => format!("Bio must be less than {BIO_MAX_LENGTH} characters"),
        };
        Self::new(field, message)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

// ── Single-value checks ──────────────────────────────────────────────────────

/// `true` if `email` has the `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// `true` if `name`, trimmed, is between the name bounds (inclusive).
pub fn is_valid_name(name: &str) -> bool {
    let len = name.trim().chars().count();
    (NAME_MIN_LENGTH..=NAME_MAX_LENGTH).contains(&len)
}

fn email_ok(email: &str) -> bool {
    !email.is_empty() && is_valid_email(email)
}

fn name_ok(name: &str) -> bool {
    !name.is_empty() && is_valid_name(name)
}

// An empty bio is the same as no bio.
fn bio_ok(bio: &str) -> bool {
    bio.chars().count() <= BIO_MAX_LENGTH
}

// ── Record checks ────────────────────────────────────────────────────────────

/// Validate a record for creation. Every field except `bio` is required.
pub fn validate_create_input(input: &CreateUserInput) -> Vec<ValidationError> {
    collect([
        (Field::Email, Some(email_ok(&input.email))),
        (Field::FirstName, Some(name_ok(&input.first_name))),
        (Field::LastName, Some(name_ok(&input.last_name))),
        (Field::Bio, input.bio.as_deref().map(bio_ok)),
    ])
}

/// Validate a partial record for update. Absent fields are not checked;
/// a field that is present but empty still is.
pub fn validate_update_input(input: &UpdateUserInput) -> Vec<ValidationError> {
    collect([
        (Field::Email, input.email.as_deref().map(email_ok)),
        (Field::FirstName, input.first_name.as_deref().map(name_ok)),
        (Field::LastName, input.last_name.as_deref().map(name_ok)),
        (Field::Bio, input.bio.as_deref().map(bio_ok)),
    ])
}

/// `None` means the check was skipped.
fn collect(outcomes: [(Field, Option<bool>); 4]) -> Vec<ValidationError> {
    outcomes
        .into_iter()
        .filter(|(_, ok)| *ok == Some(false))
        .map(|(field, _)| ValidationError::for_field(field))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(email: &str, first: &str, last: &str, bio: Option<&str>) -> CreateUserInput {
        CreateUserInput {
            email: email.into(),
            first_name: first.into(),
            last_name: last.into(),
            bio: bio.map(Into::into),
        }
    }

    fn fields(errors: &[ValidationError]) -> Vec<Field> {
        errors.iter().map(|e| e.field).collect()
    }

    // ========================================================================
    // Email
    // ========================================================================

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last+tag@mail.example.org"));
        assert!(is_valid_email("a@b.c.d"));

        assert!(!is_valid_email(""));
        assert!(!is_valid_email("bad"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("a@b.com "));
    }

    #[test]
    fn email_rejects_unicode_whitespace() {
        assert!(!is_valid_email("a\u{00a0}x@b.com"));
    }

    // ========================================================================
    // Names
    // ========================================================================

    #[test]
    fn name_bounds_are_inclusive() {
        assert!(!is_valid_name("J"));
        assert!(is_valid_name("Jo"));
        assert!(is_valid_name(&"a".repeat(50)));
        assert!(!is_valid_name(&"a".repeat(51)));
    }

    #[test]
    fn name_is_trimmed_before_measuring() {
        assert!(!is_valid_name("  J  "));
        assert!(!is_valid_name("     "));
        assert!(is_valid_name(&format!("  {}  ", "a".repeat(50))));
    }

    #[test]
    fn name_counts_characters_not_bytes() {
        // 25 two-byte characters: 50 bytes, 25 chars
        assert!(is_valid_name(&"é".repeat(25)));
        assert!(is_valid_name(&"é".repeat(50)));
        assert!(!is_valid_name(&"é".repeat(51)));
    }

    // ========================================================================
    // Create
    // ========================================================================

    #[test]
    fn create_valid_record() {
        let input = create("a@b.com", "John", "Doe", None);
        assert!(validate_create_input(&input).is_empty());
    }

    #[test]
    fn create_reports_all_failures_in_check_order() {
        let input = create("", "", "", Some(&"x".repeat(501)));
        assert_eq!(
            fields(&validate_create_input(&input)),
            vec![Field::Email, Field::FirstName, Field::LastName, Field::Bio]
        );
    }

    #[test]
    fn create_messages() {
        let input = create("bad", "J", "D", Some(&"x".repeat(501)));
        let messages: Vec<String> = validate_create_input(&input)
            .into_iter()
            .map(|e| e.message)
            .collect();
        assert_eq!(
            messages,
            vec![
                "Please enter a valid email address",
                "First name must be between 2 and 50 characters",
                "Last name must be between 2 and 50 characters",
                "Bio must be less than 500 characters",
            ]
        );
    }

    #[test]
    fn create_bio_boundary() {
        let at_limit = create("a@b.com", "John", "Doe", Some(&"x".repeat(500)));
        let over = create("a@b.com", "John", "Doe", Some(&"x".repeat(501)));
        let empty = create("a@b.com", "John", "Doe", Some(""));

        assert!(validate_create_input(&at_limit).is_empty());
        assert_eq!(fields(&validate_create_input(&over)), vec![Field::Bio]);
        assert!(validate_create_input(&empty).is_empty());
    }

    // ========================================================================
    // Update
    // ========================================================================

    #[test]
    fn update_empty_patch_is_valid() {
        assert!(validate_update_input(&UpdateUserInput::default()).is_empty());
    }

    #[test]
    fn update_checks_only_present_fields() {
        let input = UpdateUserInput {
            last_name: Some("D".into()),
            ..Default::default()
        };
        assert_eq!(fields(&validate_update_input(&input)), vec![Field::LastName]);
    }

    #[test]
    fn update_present_but_empty_is_checked() {
        let input = UpdateUserInput {
            email: Some(String::new()),
            first_name: Some(String::new()),
            bio: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(
            fields(&validate_update_input(&input)),
            vec![Field::Email, Field::FirstName]
        );
    }

    #[test]
    fn update_ignores_is_active() {
        let input = UpdateUserInput {
            is_active: Some(false),
            ..Default::default()
        };
        assert!(validate_update_input(&input).is_empty());
    }

    #[test]
    fn display_joins_field_and_message() {
        let err = ValidationError::for_field(Field::Bio);
        assert_eq!(err.to_string(), "bio: Bio must be less than 500 characters");
    }
}

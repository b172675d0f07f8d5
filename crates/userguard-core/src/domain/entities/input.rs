use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::validation::{ValidationError, validate_create_input, validate_update_input};

/// Candidate data for a new user.
///
/// Missing or `null` required fields deserialize as empty strings so that
/// the validator, not the parser, reports them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateUserInput {
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl CreateUserInput {
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            bio: None,
        }
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    /// Run the creation checks. Empty means acceptable.
    pub fn validate(&self) -> Vec<ValidationError> {
        validate_create_input(self)
    }
}

/// A partial update. `None` leaves the stored value unchanged.
///
/// An explicit `null` for email or a name is a supplied value, not an
/// absent one: it arrives as `Some("")` and fails its check. A `null` bio
/// stays `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateUserInput {
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_null_as_empty"
    )]
    pub email: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_null_as_empty"
    )]
    pub first_name: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_null_as_empty"
    )]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl UpdateUserInput {
    /// `true` if the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.bio.is_none()
            && self.is_active.is_none()
    }

    /// Run the update checks on the supplied fields only.
    pub fn validate(&self) -> Vec<ValidationError> {
        validate_update_input(self)
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// Only called when the key is present; absent keys fall back to `default`.
fn present_null_as_empty<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    null_as_empty(deserializer).map(Some)
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    common::initial,
    entities::input::{CreateUserInput, UpdateUserInput},
};

/// A stored user record.
///
/// Constructed only from input that already passed validation; the
/// application service is the gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Build a new, active user. Values are stored as supplied.
    pub(crate) fn from_input(input: CreateUserInput, id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            id,
            email: input.email,
            first_name: input.first_name,
            last_name: input.last_name,
            bio: input.bio,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the supplied fields and bump `updated_at`.
    pub(crate) fn apply(mut self, patch: UpdateUserInput, now: DateTime<Utc>) -> Self {
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        if let Some(bio) = patch.bio {
            self.bio = Some(bio);
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
        self.updated_at = now;
        self
    }

    /// `"First Last"`, each part trimmed.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }

    /// Uppercased first letter of each name, e.g. `"JD"`.
    pub fn initials(&self) -> String {
        let mut out = initial(&self.first_name);
        out.push_str(&initial(&self.last_name));
        out
    }
}

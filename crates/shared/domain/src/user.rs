//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timestamp::advance;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    /// Store-assigned identifier
    pub id: String,
    /// Unique login name
    pub username: String,
    /// Unique email address
    pub email: String,
    /// Display name
    pub full_name: String,
    /// Whether the account is enabled
    pub is_active: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new active user. The identifier is assigned by the store.
    pub fn new(input: CreateUser) -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            username: input.username,
            email: input.email,
            full_name: input.full_name,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update. Absent fields keep their current values;
    /// `updated_at` always moves forward.
    pub fn apply(&mut self, patch: UpdateUser) {
        if let Some(username) = patch.username {
            self.username = username;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(full_name) = patch.full_name {
            self.full_name = full_name;
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
        self.updated_at = advance(self.updated_at);
    }
}

/// User creation data transfer object
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CreateUser {
    /// Unique login name
    pub username: String,
    /// Unique email address
    pub email: String,
    /// Display name
    pub full_name: String,
}

impl CreateUser {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        full_name: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            full_name: full_name.into(),
        }
    }
}

/// User update data transfer object (patch semantics)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UpdateUser {
    pub username: Option<String>,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateUser {
    /// True when the patch would not change any field
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.email.is_none()
            && self.full_name.is_none()
            && self.is_active.is_none()
    }
}

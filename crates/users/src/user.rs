use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use userdesk_core::{DomainError, DomainResult, Entity, UserId};

use crate::Email;

pub const EMPTY_NAME: &str = "Name cannot be empty";

/// Entity: User.
///
/// Serializes to the boundary shape `{ id, email, name, createdAt }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    email: Email,
    name: String,
    created_at: DateTime<Utc>,
}

impl User {
    /// Build a user stamped with the current time.
    ///
    /// No validation happens here: the email is already a validated value object
    /// and callers check the name before construction.
    pub fn new(id: UserId, email: Email, name: impl Into<String>) -> Self {
        Self::with_created_at(id, email, name, Utc::now())
    }

    pub fn with_created_at(
        id: UserId,
        email: Email,
        name: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email,
            name: name.into(),
            created_at,
        }
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Invariant: a user's name is never blank.
    pub fn ensure_valid_name(name: &str) -> DomainResult<()> {
        if name.trim().is_empty() {
            return Err(DomainError::validation(EMPTY_NAME));
        }
        Ok(())
    }

    /// Rename in place. A blank name is rejected and leaves the user untouched.
    pub fn update_name(&mut self, new_name: impl Into<String>) -> DomainResult<()> {
        let new_name = new_name.into();
        Self::ensure_valid_name(&new_name)?;
        self.name = new_name;
        Ok(())
    }

    /// `"{name} ({email})"`
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.name, self.email)
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

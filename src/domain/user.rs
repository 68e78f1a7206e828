//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::entity::{Entity, EntityKind};

fn default_true() -> bool {
    true
}

/// User document as written to the `user` collection
#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct User {
    /// Full name
    pub name: String,
    /// Email address
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    /// Salted password hash in `salt$hash` format
    pub password_hash: String,
    /// Whether user is active
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl User {
    /// Create a new active user
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        Self {
            name,
            email,
            password_hash,
            is_active: true,
        }
    }
}

// Don't expose the hash in debug output
impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password_hash", &"[REDACTED]")
            .field("is_active", &self.is_active)
            .finish()
    }
}

impl Entity for User {
    const KIND: EntityKind = EntityKind::User;
}

/// User as read back from the store, with its identifier.
///
/// No `Debug` derive, so the stored hash cannot end up in debug logs.
#[derive(Clone)]
pub struct UserRecord {
    /// Store-assigned identifier as a string
    pub id: String,
    /// Full name
    pub name: String,
    /// Email address
    pub email: String,
    /// Stored hash, verified by the configured `PasswordHasher`
    pub password_hash: String,
}

/// User response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    /// Store-assigned identifier
    #[schema(example = "665f1c2e9b1d8a3f4c2e7a10")]
    pub id: String,
    /// Full name
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// Email address
    #[schema(example = "ada@example.com")]
    pub email: String,
}

impl From<UserRecord> for UserResponse {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
        }
    }
}

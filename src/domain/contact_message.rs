//! Contact message schema.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::entity::{Entity, EntityKind};

/// Contact message document stored in the `contactmessage` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ContactMessage {
    /// Sender name
    pub name: String,
    /// Sender email
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    /// Topic or subject
    pub topic: Option<String>,
    /// Message body
    pub message: String,
}

impl Entity for ContactMessage {
    const KIND: EntityKind = EntityKind::ContactMessage;
}

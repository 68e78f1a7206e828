use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::CONTACT_STATUS_RECEIVED;

/// Message-only response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "SaaS Backend Running")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Identifier of a newly created document
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IdResponse {
    #[schema(example = "665f1c2e9b1d8a3f4c2e7a10")]
    pub id: String,
}

/// Acknowledgement for a stored contact message
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactReceipt {
    #[schema(example = "665f1c2e9b1d8a3f4c2e7a10")]
    pub id: String,
    #[schema(example = "received")]
    pub status: String,
}

impl ContactReceipt {
    pub fn received(id: String) -> Self {
        Self {
            id,
            status: CONTACT_STATUS_RECEIVED.to_string(),
        }
    }
}

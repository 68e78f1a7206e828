//! Contact service - Accepts contact form submissions.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::ContactMessage;
use crate::errors::AppResult;
use crate::infra::ContactMessageRepository;

#[async_trait]
pub trait ContactService: Send + Sync {
    /// Store a message and return its identifier
    async fn submit(&self, message: ContactMessage) -> AppResult<String>;
}

pub struct ContactInbox {
    messages: Arc<dyn ContactMessageRepository>,
}

impl ContactInbox {
    pub fn new(messages: Arc<dyn ContactMessageRepository>) -> Self {
        Self { messages }
    }
}

#[async_trait]
impl ContactService for ContactInbox {
    async fn submit(&self, message: ContactMessage) -> AppResult<String> {
        let id = self.messages.create(&message).await?;
        tracing::info!(%id, "contact message received");
        Ok(id)
    }
}

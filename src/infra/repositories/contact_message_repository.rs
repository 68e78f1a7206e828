//! Contact message repository.

use std::sync::Arc;

use async_trait::async_trait;

use super::base::Documents;
use crate::domain::ContactMessage;
use crate::errors::AppResult;
use crate::infra::store::DocumentStore;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    /// Insert a message, returning its identifier
    async fn create(&self, message: &ContactMessage) -> AppResult<String>;
}

pub struct ContactMessageStore {
    documents: Documents<ContactMessage>,
}

impl ContactMessageStore {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            documents: Documents::new(store),
        }
    }
}

#[async_trait]
impl ContactMessageRepository for ContactMessageStore {
    async fn create(&self, message: &ContactMessage) -> AppResult<String> {
        self.documents.create_document(message).await
    }
}

//! Blog post repository.

use std::sync::Arc;

use async_trait::async_trait;
use bson::{doc, Document};

use super::base::Documents;
use crate::domain::BlogPost;
use crate::errors::AppResult;
use crate::infra::store::DocumentStore;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait BlogPostRepository: Send + Sync {
    /// Insert a post, returning its identifier. Slugs are not checked for uniqueness.
    async fn create(&self, post: &BlogPost) -> AppResult<String>;

    /// Up to `limit` raw documents with `published = true`, in store order
    async fn list_published(&self, limit: i64) -> AppResult<Vec<Document>>;
}

pub struct BlogPostStore {
    documents: Documents<BlogPost>,
}

impl BlogPostStore {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            documents: Documents::new(store),
        }
    }
}

#[async_trait]
impl BlogPostRepository for BlogPostStore {
    async fn create(&self, post: &BlogPost) -> AppResult<String> {
        self.documents.create_document(post).await
    }

    async fn list_published(&self, limit: i64) -> AppResult<Vec<Document>> {
        self.documents
            .get_documents(doc! { "published": true }, limit)
            .await
    }
}

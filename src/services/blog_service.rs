//! Blog service - Listing and creating posts.

use async_trait::async_trait;
use bson::Document;
use serde_json::Value;
use std::sync::Arc;

use crate::config::{BLOG_LIST_LIMIT, DOCUMENT_ID_KEY};
use crate::domain::BlogPost;
use crate::errors::AppResult;
use crate::infra::store::{document_to_json, id_to_string};
use crate::infra::BlogPostRepository;

#[async_trait]
pub trait BlogService: Send + Sync {
    /// Published posts (at most 20) with `_id` exposed as `id`
    async fn list_published(&self) -> AppResult<Vec<Value>>;

    /// Store a post and return its identifier
    async fn create(&self, post: BlogPost) -> AppResult<String>;
}

pub struct BlogManager {
    posts: Arc<dyn BlogPostRepository>,
}

impl BlogManager {
    pub fn new(posts: Arc<dyn BlogPostRepository>) -> Self {
        Self { posts }
    }
}

/// Replace the store identifier key with a string `id`.
fn present_post(mut document: Document) -> Value {
    let id = document
        .remove(DOCUMENT_ID_KEY)
        .map(|id| id_to_string(&id))
        .unwrap_or_default();
    document.insert("id", id);
    document_to_json(document)
}

#[async_trait]
impl BlogService for BlogManager {
    async fn list_published(&self) -> AppResult<Vec<Value>> {
        let documents = self.posts.list_published(BLOG_LIST_LIMIT).await?;
        Ok(documents.into_iter().map(present_post).collect())
    }

    async fn create(&self, post: BlogPost) -> AppResult<String> {
        self.posts.create(&post).await
    }
}

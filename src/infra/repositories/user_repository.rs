//! User repository.

use std::sync::Arc;

use async_trait::async_trait;
use bson::{doc, Bson};
use serde::Deserialize;

use super::base::Documents;
use crate::config::EMPTY_PASSWORD_HASH;
use crate::domain::{User, UserRecord};
use crate::errors::AppResult;
use crate::infra::store::{id_to_string, DocumentStore};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user, returning its identifier. Email uniqueness is not checked.
    async fn create(&self, user: &User) -> AppResult<String>;

    /// First user with exactly this email, if any
    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserRecord>>;
}

/// User document as read back; absent fields fall back to empty values.
#[derive(Deserialize)]
struct StoredUser {
    #[serde(rename = "_id")]
    id: Bson,
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default = "empty_password_hash")]
    password_hash: String,
}

fn empty_password_hash() -> String {
    EMPTY_PASSWORD_HASH.to_string()
}

impl From<StoredUser> for UserRecord {
    fn from(stored: StoredUser) -> Self {
        Self {
            id: id_to_string(&stored.id),
            name: stored.name,
            email: stored.email,
            password_hash: stored.password_hash,
        }
    }
}

/// Store-backed implementation of UserRepository
pub struct UserStore {
    documents: Documents<User>,
}

impl UserStore {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            documents: Documents::new(store),
        }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn create(&self, user: &User) -> AppResult<String> {
        self.documents.create_document(user).await
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserRecord>> {
        let found = self
            .documents
            .get_documents(doc! { "email": email }, 1)
            .await?;

        match found.into_iter().next() {
            Some(document) => {
                let stored: StoredUser = bson::from_document(document)?;
                Ok(Some(stored.into()))
            }
            None => Ok(None),
        }
    }
}

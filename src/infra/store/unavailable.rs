//! Stand-in store used when no database connection is configured.

use async_trait::async_trait;
use bson::Document;

use super::DocumentStore;
use crate::config::DATABASE_NOT_AVAILABLE;
use crate::domain::EntityKind;
use crate::errors::{AppError, AppResult};

/// Fails every operation with the "database not available" store error.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableStore;

#[async_trait]
impl DocumentStore for UnavailableStore {
    async fn insert_one(&self, _kind: EntityKind, _document: Document) -> AppResult<String> {
        Err(AppError::store(DATABASE_NOT_AVAILABLE))
    }

    async fn find_many(
        &self,
        _kind: EntityKind,
        _filter: Document,
        _limit: i64,
    ) -> AppResult<Vec<Document>> {
        Err(AppError::store(DATABASE_NOT_AVAILABLE))
    }

    async fn list_collection_names(&self) -> AppResult<Vec<String>> {
        Err(AppError::store(DATABASE_NOT_AVAILABLE))
    }
}

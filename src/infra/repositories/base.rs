//! Generic document access shared by every repository.

use std::marker::PhantomData;
use std::sync::Arc;

use bson::{DateTime, Document};
use validator::Validate;

use crate::config::{CREATED_AT_KEY, UPDATED_AT_KEY};
use crate::domain::Entity;
use crate::errors::AppResult;
use crate::infra::store::DocumentStore;

/// Documents of one entity kind, addressed through the kind's collection.
pub struct Documents<E: Entity> {
    store: Arc<dyn DocumentStore>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> Documents<E> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            _entity: PhantomData,
        }
    }

    /// Validate, stamp timestamps and insert; returns the new identifier.
    pub async fn create_document(&self, entity: &E) -> AppResult<String> {
        entity.validate()?;

        let mut document = bson::to_document(entity)?;
        let now = DateTime::now();
        document.insert(CREATED_AT_KEY, now);
        document.insert(UPDATED_AT_KEY, now);

        let id = self.store.insert_one(E::KIND, document).await?;
        tracing::debug!(kind = %E::KIND, %id, "document created");
        Ok(id)
    }

    /// Up to `limit` documents matching `filter`, identifiers kept under `_id`.
    pub async fn get_documents(&self, filter: Document, limit: i64) -> AppResult<Vec<Document>> {
        self.store.find_many(E::KIND, filter, limit).await
    }
}

//! In-memory document store for tests and local runs.

use std::collections::HashMap;

use async_trait::async_trait;
use bson::{oid::ObjectId, Bson, Document};
use tokio::sync::RwLock;

use super::{id_to_string, DocumentStore};
use crate::config::DOCUMENT_ID_KEY;
use crate::domain::EntityKind;
use crate::errors::AppResult;

/// Collections held in process memory. Contents are lost on drop.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<&'static str, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every document stored for `kind`, in insertion order
    pub async fn documents(&self, kind: EntityKind) -> Vec<Document> {
        self.collections
            .read()
            .await
            .get(kind.collection())
            .cloned()
            .unwrap_or_default()
    }
}

fn matches_filter(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, expected)| document.get(key) == Some(expected))
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert_one(&self, kind: EntityKind, document: Document) -> AppResult<String> {
        let id = document
            .get(DOCUMENT_ID_KEY)
            .cloned()
            .unwrap_or_else(|| Bson::ObjectId(ObjectId::new()));

        let mut stored = Document::new();
        stored.insert(DOCUMENT_ID_KEY, id.clone());
        stored.extend(document);

        self.collections
            .write()
            .await
            .entry(kind.collection())
            .or_default()
            .push(stored);

        Ok(id_to_string(&id))
    }

    async fn find_many(
        &self,
        kind: EntityKind,
        filter: Document,
        limit: i64,
    ) -> AppResult<Vec<Document>> {
        let take = usize::try_from(limit)
            .ok()
            .filter(|n| *n > 0)
            .unwrap_or(usize::MAX);

        let collections = self.collections.read().await;
        let found = collections
            .get(kind.collection())
            .map(|docs| {
                docs.iter()
                    .filter(|d| matches_filter(d, &filter))
                    .take(take)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        Ok(found)
    }

    async fn list_collection_names(&self) -> AppResult<Vec<String>> {
        let mut names: Vec<String> = self
            .collections
            .read()
            .await
            .keys()
            .map(|name| name.to_string())
            .collect();
        names.sort();
        Ok(names)
    }
}

//! MongoDB-backed document store.

use async_trait::async_trait;
use bson::Document;
use futures::TryStreamExt;
use mongodb::{Client, Collection, Database};

use super::{id_to_string, DocumentStore};
use crate::domain::EntityKind;
use crate::errors::AppResult;

/// MongoDB database handle.
///
/// The driver connects lazily, so constructing the store succeeds while the
/// server is unreachable and failures surface on the first operation.
#[derive(Clone)]
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    /// Create a client for `uri` and select `db_name`
    pub async fn connect(uri: &str, db_name: &str) -> AppResult<Self> {
        let client = Client::with_uri_str(uri).await?;

        Ok(Self {
            database: client.database(db_name),
        })
    }

    /// Database name
    pub fn name(&self) -> &str {
        self.database.name()
    }

    fn collection(&self, kind: EntityKind) -> Collection<Document> {
        self.database.collection(kind.collection())
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert_one(&self, kind: EntityKind, document: Document) -> AppResult<String> {
        let result = self.collection(kind).insert_one(document).await?;
        Ok(id_to_string(&result.inserted_id))
    }

    async fn find_many(
        &self,
        kind: EntityKind,
        filter: Document,
        limit: i64,
    ) -> AppResult<Vec<Document>> {
        let cursor = self.collection(kind).find(filter).limit(limit).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;
        Ok(documents)
    }

    async fn list_collection_names(&self) -> AppResult<Vec<String>> {
        Ok(self.database.list_collection_names().await?)
    }
}

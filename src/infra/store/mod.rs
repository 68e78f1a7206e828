//! Document store adapter.
//!
//! A `DocumentStore` inserts and queries schema-flexible documents in the
//! collection owned by an [`EntityKind`]. Identifiers come back as strings;
//! queried documents keep theirs under `_id`.

use async_trait::async_trait;
use bson::{Bson, Document};
use serde_json::Value;

use crate::domain::EntityKind;
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

mod memory;
mod mongo;
mod unavailable;

pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use unavailable::UnavailableStore;

/// Operations every document store backend provides.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert one document, returning its assigned identifier
    async fn insert_one(&self, kind: EntityKind, document: Document) -> AppResult<String>;

    /// Find documents matching an equality filter. `limit == 0` means no limit.
    async fn find_many(
        &self,
        kind: EntityKind,
        filter: Document,
        limit: i64,
    ) -> AppResult<Vec<Document>>;

    /// Names of the collections present in the database
    async fn list_collection_names(&self) -> AppResult<Vec<String>>;
}

/// Render a store identifier as a string.
pub fn id_to_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Convert a stored document to plain JSON.
///
/// Object ids become hex strings and timestamps RFC 3339 strings; everything
/// else uses relaxed extended JSON.
pub fn document_to_json(document: Document) -> Value {
    Value::Object(
        document
            .into_iter()
            .map(|(key, value)| (key, bson_to_json(value)))
            .collect(),
    )
}

fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => match dt.try_to_rfc3339_string() {
            Ok(s) => Value::String(s),
            Err(_) => Bson::DateTime(dt).into_relaxed_extjson(),
        },
        Bson::Document(doc) => document_to_json(doc),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}

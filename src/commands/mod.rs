//! Commands module - CLI command implementations.
//!
//! Each command is implemented in its own module for separation of concerns.

pub mod diagnose;
pub mod serve;

use std::sync::Arc;

use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::{DocumentStore, MongoStore};

/// Open the configured MongoDB store.
///
/// Returns `None` when the database is not configured or the client cannot
/// be built, so the server still starts and reports the store as unavailable.
pub(crate) async fn open_store(config: &Config) -> AppResult<Option<Arc<dyn DocumentStore>>> {
    let Some((url, name)) = config.store_target() else {
        tracing::warn!("DATABASE_URL or DATABASE_NAME not set, running without a database");
        return Ok(None);
    };

    match MongoStore::connect(url, name).await {
        Ok(store) => {
            tracing::info!(database = store.name(), "MongoDB client ready");
            let store: Arc<dyn DocumentStore> = Arc::new(store);
            Ok(Some(store))
        }
        Err(e) => {
            tracing::warn!("MongoDB client setup failed, continuing without a database: {}", e);
            Ok(None)
        }
    }
}

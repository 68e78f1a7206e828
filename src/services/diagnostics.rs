//! Store and environment diagnostics.
//!
//! Purely advisory: every failure is folded into a descriptive string and
//! the report itself is always produced.

use serde::Serialize;
use utoipa::ToSchema;

use crate::config::{
    DIAGNOSTIC_COLLECTION_LIMIT, DIAGNOSTIC_ERROR_MAX_CHARS, ENV_DATABASE_NAME, ENV_DATABASE_URL,
};
use crate::infra::DocumentStore;

const BACKEND_RUNNING: &str = "✅ Running";
const DATABASE_NOT_AVAILABLE: &str = "❌ Not Available";
const DATABASE_AVAILABLE: &str = "✅ Available";
const DATABASE_WORKING: &str = "✅ Connected & Working";
const CONNECTED: &str = "Connected";
const NOT_CONNECTED: &str = "Not Connected";
const VAR_SET: &str = "✅ Set";
const VAR_NOT_SET: &str = "❌ Not Set";

/// Diagnostics report returned by `GET /test`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DiagnosticsReport {
    #[schema(example = "✅ Running")]
    pub backend: String,
    #[schema(example = "✅ Connected & Working")]
    pub database: String,
    /// Whether `DATABASE_URL` is set
    #[schema(example = "✅ Set")]
    pub database_url: String,
    /// Whether `DATABASE_NAME` is set
    #[schema(example = "✅ Set")]
    pub database_name: String,
    #[schema(example = "Connected")]
    pub connection_status: String,
    /// First collection names reported by the store
    pub collections: Vec<String>,
}

/// Whether an environment variable is set to a non-empty value.
pub fn env_is_set(key: &str) -> bool {
    std::env::var(key).map(|v| !v.is_empty()).unwrap_or(false)
}

fn truncate(message: &str, max_chars: usize) -> String {
    message.chars().take(max_chars).collect()
}

fn presence(set: bool) -> String {
    if set { VAR_SET } else { VAR_NOT_SET }.to_string()
}

/// Probe the store handle (if any) and report environment presence.
pub async fn collect(
    store: Option<&dyn DocumentStore>,
    env_is_set: impl Fn(&str) -> bool,
) -> DiagnosticsReport {
    let mut report = DiagnosticsReport {
        backend: BACKEND_RUNNING.to_string(),
        database: DATABASE_NOT_AVAILABLE.to_string(),
        database_url: presence(env_is_set(ENV_DATABASE_URL)),
        database_name: presence(env_is_set(ENV_DATABASE_NAME)),
        connection_status: NOT_CONNECTED.to_string(),
        collections: Vec::new(),
    };

    let Some(store) = store else {
        return report;
    };

    report.database = DATABASE_AVAILABLE.to_string();
    report.connection_status = CONNECTED.to_string();

    match store.list_collection_names().await {
        Ok(mut names) => {
            names.truncate(DIAGNOSTIC_COLLECTION_LIMIT);
            report.collections = names;
            report.database = DATABASE_WORKING.to_string();
        }
        Err(e) => {
            tracing::debug!("Collection listing failed: {}", e);
            report.database = format!(
                "⚠️  Connected but Error: {}",
                truncate(&e.to_string(), DIAGNOSTIC_ERROR_MAX_CHARS)
            );
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::infra::MockDocumentStore;

    #[tokio::test]
    async fn test_without_store() {
        let report = collect(None, |_| false).await;

        assert_eq!(report.backend, "✅ Running");
        assert_eq!(report.database, "❌ Not Available");
        assert_eq!(report.connection_status, "Not Connected");
        assert_eq!(report.database_url, "❌ Not Set");
        assert_eq!(report.database_name, "❌ Not Set");
        assert!(report.collections.is_empty());
    }

    #[tokio::test]
    async fn test_lists_first_ten_collections() {
        let mut store = MockDocumentStore::new();
        store
            .expect_list_collection_names()
            .returning(|| Ok((0..15).map(|i| format!("c{}", i)).collect()));

        let report = collect(Some(&store), |key| key == ENV_DATABASE_URL).await;

        assert_eq!(report.database, "✅ Connected & Working");
        assert_eq!(report.connection_status, "Connected");
        assert_eq!(report.collections.len(), 10);
        assert_eq!(report.collections[0], "c0");
        assert_eq!(report.database_url, "✅ Set");
        assert_eq!(report.database_name, "❌ Not Set");
    }

    #[tokio::test]
    async fn test_listing_error_is_truncated() {
        let long_error = "x".repeat(80);
        let mut store = MockDocumentStore::new();
        let message = long_error.clone();
        store
            .expect_list_collection_names()
            .returning(move || Err(AppError::store(message.clone())));

        let report = collect(Some(&store), |_| true).await;

        assert_eq!(
            report.database,
            format!("⚠️  Connected but Error: {}", "x".repeat(50))
        );
        assert_eq!(report.connection_status, "Connected");
        assert!(report.collections.is_empty());
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate("✅✅✅", 2), "✅✅");
        assert_eq!(truncate("short", 50), "short");
    }
}

//! Serve command - Starts the HTTP server.

use std::sync::Arc;

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::domain::hasher_for;
use crate::errors::{AppError, AppResult};
use crate::infra::{DocumentStore, MemoryStore};

use super::open_store;

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: Config) -> AppResult<()> {
    tracing::info!("Starting server...");

    let store: Option<Arc<dyn DocumentStore>> = if args.in_memory {
        tracing::warn!("Using in-memory store, data will not survive a restart");
        Some(Arc::new(MemoryStore::new()) as Arc<dyn DocumentStore>)
    } else {
        open_store(&config).await?
    };

    tracing::debug!(scheme = ?config.password_scheme, "Password hashing scheme selected");
    let app_state = AppState::from_store(store, hasher_for(config.password_scheme));

    // Build router
    let app = create_router(app_state);

    // Start server
    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}

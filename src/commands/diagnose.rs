//! Diagnose command - Prints the same report as `GET /test`.

use crate::cli::args::DiagnoseArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::services::diagnostics;

use super::open_store;

/// Execute the diagnose command
pub async fn execute(args: DiagnoseArgs, config: Config) -> AppResult<()> {
    tracing::info!("Collecting diagnostics...");

    let store = open_store(&config).await?;
    let report = diagnostics::collect(store.as_deref(), diagnostics::env_is_set).await;

    let rendered = if args.compact {
        serde_json::to_string(&report)
    } else {
        serde_json::to_string_pretty(&report)
    }
    .map_err(|e| AppError::internal(format!("Failed to render report: {}", e)))?;

    println!("{}", rendered);
    Ok(())
}

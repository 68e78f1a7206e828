//! Store diagnostics handler.

use axum::{extract::State, response::Json, routing::get, Router};

use crate::api::AppState;
use crate::services::diagnostics::{self, DiagnosticsReport};

pub fn diagnostics_routes() -> Router<AppState> {
    Router::new().route("/test", get(test_database))
}

/// Report store reachability and configuration presence.
///
/// Always answers 200; failures are described inside the report.
#[utoipa::path(
    get,
    path = "/test",
    tag = "Diagnostics",
    responses(
        (status = 200, description = "Diagnostics report", body = DiagnosticsReport)
    )
)]
pub async fn test_database(State(state): State<AppState>) -> Json<DiagnosticsReport> {
    let report = diagnostics::collect(state.store.as_deref(), diagnostics::env_is_set).await;
    Json(report)
}

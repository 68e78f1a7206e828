//! Application route configuration.

use axum::{response::Json, routing::get, Router};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{auth_routes, blog_routes, contact_routes, diagnostics_routes};
use super::openapi::ApiDoc;
use super::AppState;
use crate::config::ROOT_MESSAGE;
use crate::types::MessageResponse;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .merge(diagnostics_routes())
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .nest("/api/auth", auth_routes())
        .merge(blog_routes())
        .merge(contact_routes())
        // Global middleware
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Fully open CORS. Wildcards cannot be combined with credentials, so
/// origin, methods and headers are mirrored from the request.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Root endpoint
#[utoipa::path(
    get,
    path = "/",
    tag = "Diagnostics",
    responses((status = 200, description = "Service is running", body = MessageResponse))
)]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new(ROOT_MESSAGE))
}

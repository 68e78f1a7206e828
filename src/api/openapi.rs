//! OpenAPI documentation configuration.
//!
//! Served as Swagger UI at `/docs`, raw document at `/openapi.json`.

use utoipa::OpenApi;

use crate::api::handlers::{auth_handler, blog_handler, contact_handler, diagnostics_handler};
use crate::api::routes;
use crate::domain::UserResponse;
use crate::services::DiagnosticsReport;
use crate::types::{ContactReceipt, IdResponse, MessageResponse};

/// OpenAPI documentation for the SaaS Starter API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "SaaS Starter API",
        version = "0.1.0",
        description = "User registration and login, blog posts and contact messages over a document store",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        routes::root,
        diagnostics_handler::test_database,
        auth_handler::register,
        auth_handler::login,
        blog_handler::list_posts,
        blog_handler::create_post,
        contact_handler::submit_contact,
    ),
    components(
        schemas(
            UserResponse,
            MessageResponse,
            IdResponse,
            ContactReceipt,
            DiagnosticsReport,
            auth_handler::RegisterRequest,
            auth_handler::LoginRequest,
            blog_handler::BlogCreateRequest,
            contact_handler::ContactRequest,
        )
    ),
    tags(
        (name = "Authentication", description = "User registration and credential checks"),
        (name = "Blog", description = "Blog post listing and creation"),
        (name = "Contact", description = "Contact form submissions"),
        (name = "Diagnostics", description = "Liveness and store diagnostics")
    )
)]
pub struct ApiDoc;

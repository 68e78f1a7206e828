//! Blog handlers.

use axum::{extract::State, response::Json, routing::get, Router};
use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::BlogPost;
use crate::errors::AppResult;
use crate::types::IdResponse;

fn default_published() -> bool {
    true
}

/// Blog post creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct BlogCreateRequest {
    #[schema(example = "Hello, world")]
    pub title: String,
    #[schema(example = "hello-world")]
    pub slug: String,
    pub excerpt: Option<String>,
    #[schema(example = "# Markdown content")]
    pub content: String,
    #[schema(example = "Ada Lovelace")]
    pub author: String,
    /// Defaults to true
    #[serde(default = "default_published")]
    pub published: bool,
}

impl From<BlogCreateRequest> for BlogPost {
    fn from(request: BlogCreateRequest) -> Self {
        Self {
            title: request.title,
            slug: request.slug,
            excerpt: request.excerpt,
            content: request.content,
            author: request.author,
            published: request.published,
        }
    }
}

pub fn blog_routes() -> Router<AppState> {
    Router::new().route("/api/blog", get(list_posts).post(create_post))
}

/// List up to 20 published posts
#[utoipa::path(
    get,
    path = "/api/blog",
    tag = "Blog",
    responses(
        (status = 200, description = "Published posts, each with a string `id` and its stored fields"),
        (status = 400, description = "Store error")
    )
)]
pub async fn list_posts(State(state): State<AppState>) -> AppResult<Json<Vec<Value>>> {
    let posts = state.blog_service.list_published().await?;
    Ok(Json(posts))
}

/// Create a blog post
#[utoipa::path(
    post,
    path = "/api/blog",
    tag = "Blog",
    request_body = BlogCreateRequest,
    responses(
        (status = 200, description = "Post created", body = IdResponse),
        (status = 400, description = "Store error"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_post(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<BlogCreateRequest>,
) -> AppResult<Json<IdResponse>> {
    let id = state.blog_service.create(payload.into()).await?;
    Ok(Json(IdResponse { id }))
}

//! Contact handler.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::ContactMessage;
use crate::errors::AppResult;
use crate::types::ContactReceipt;

/// Contact form submission
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ContactRequest {
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[schema(example = "Pricing")]
    pub topic: Option<String>,
    #[schema(example = "Do you offer annual plans?")]
    pub message: String,
}

impl From<ContactRequest> for ContactMessage {
    fn from(request: ContactRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            topic: request.topic,
            message: request.message,
        }
    }
}

pub fn contact_routes() -> Router<AppState> {
    Router::new().route("/api/contact", post(submit_contact))
}

/// Submit a contact message
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "Contact",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Message stored", body = ContactReceipt),
        (status = 400, description = "Store error"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn submit_contact(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ContactRequest>,
) -> AppResult<Json<ContactReceipt>> {
    let id = state.contact_service.submit(payload.into()).await?;
    Ok(Json(ContactReceipt::received(id)))
}

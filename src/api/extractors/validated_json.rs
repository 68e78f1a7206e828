//! JSON body extractor that runs field validation before the handler.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::AppError;

/// `Json<T>` plus `T::validate()`.
///
/// Malformed bodies, missing fields, a wrong content type and failed field
/// rules all become [`AppError::Validation`] (422), so handlers only ever
/// see payloads that passed their schema.
///
/// ```rust,ignore
/// async fn submit(ValidatedJson(payload): ValidatedJson<ContactRequest>) { /* ... */ }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(reject_body)?;

        payload.validate()?;

        Ok(ValidatedJson(payload))
    }
}

fn reject_body(rejection: JsonRejection) -> AppError {
    tracing::debug!(status = %rejection.status(), "Rejected request body");
    AppError::validation(rejection.body_text())
}

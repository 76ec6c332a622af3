use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::error::ApiError;

/// Decodes the request body as a JSON object into `T`.
///
/// Unlike `axum::Json` this ignores the `Content-Type` header and turns every
/// decode failure into [`ApiError::InvalidPayload`].
pub struct JsonObject<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonObject<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await.map_err(|e| {
            warn!(error = %e, "failed to read request body");
            ApiError::InvalidPayload
        })?;

        let value: Value = serde_json::from_slice(&body).map_err(|e| {
            warn!(error = %e, "request body is not valid JSON");
            ApiError::InvalidPayload
        })?;
        if !value.is_object() {
            warn!("request body is not a JSON object");
            return Err(ApiError::InvalidPayload);
        }

        serde_json::from_value(value).map(JsonObject).map_err(|e| {
            warn!(error = %e, "request body has unexpected field types");
            ApiError::InvalidPayload
        })
    }
}

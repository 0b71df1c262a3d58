use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::EdgeError;

/// JSON body extractor that ignores `Content-Type` and turns every failure
/// (unreadable body, invalid JSON, missing field) into a 500 through
/// [`EdgeError::MalformedBody`] instead of axum's 4xx rejections.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = EdgeError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| EdgeError::MalformedBody(rejection.body_text()))?;

        let value = serde_json::from_slice::<T>(&bytes)
            .map_err(|e| EdgeError::MalformedBody(e.to_string()))?;
        Ok(JsonBody(value))
    }
}

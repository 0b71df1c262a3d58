use axum::{
    Json,
    extract::State,
    http::{HeaderMap, Method},
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::middleware::cors::preflight_response;
use crate::types::payloads::AccessesResponse;
use crate::{EdgeError, router::EdgeState};

/// GET /api/acessos -> every row of `acessos`, wrapped as `{"results": ...}`.
pub async fn accesses_handler(
    State(state): State<EdgeState>,
    method: Method,
    headers: HeaderMap,
) -> Result<Response, EdgeError> {
    // Unreachable behind `intercept_options`; answers the same way if mounted bare.
    if method == Method::OPTIONS {
        return Ok(preflight_response(&headers));
    }

    let results = state.store.list_accesses().await.map_err(|e| {
        error!(error = %e, "error fetching access data");
        EdgeError::AccessListing(e)
    })?;

    Ok(Json(AccessesResponse { results }).into_response())
}

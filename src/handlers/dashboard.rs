use axum::{
    Json,
    http::{HeaderMap, header},
};
use chrono::Utc;

use crate::EdgeError;
use crate::types::payloads::MessageResponse;
use crate::types::token::DashboardClaim;

/// GET /dashboard -> greets the email found in `Authorization` while its expiry
/// lies in the future. Nothing is checked against the store.
pub async fn dashboard_handler(headers: HeaderMap) -> Result<Json<MessageResponse>, EdgeError> {
    // An empty header counts as absent.
    let Some(raw) = headers
        .get(header::AUTHORIZATION)
        .filter(|v| !v.is_empty())
    else {
        return Err(EdgeError::Unauthorized);
    };
    let auth = String::from_utf8_lossy(raw.as_bytes());

    let claim = DashboardClaim::from_header(&auth).ok_or(EdgeError::MalformedAuthorization)?;
    if !claim.is_valid_at(Utc::now().timestamp_millis()) {
        return Err(EdgeError::InvalidToken);
    }

    Ok(Json(MessageResponse::new(format!(
        "Welcome to the dashboard, {}",
        claim.email
    ))))
}

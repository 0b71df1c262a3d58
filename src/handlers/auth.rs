use axum::{Json, extract::State};
use chrono::Utc;
use tracing::{info, warn};

use crate::middleware::JsonBody;
use crate::types::password::EncodedPassword;
use crate::types::payloads::{CredentialsPayload, MessageResponse, TokenResponse};
use crate::types::token;
use crate::{EdgeError, router::EdgeState};

/// POST /api/register -> stores `(email, encoded password)`; no duplicate check.
pub async fn register_handler(
    State(state): State<EdgeState>,
    JsonBody(body): JsonBody<CredentialsPayload>,
) -> Result<Json<MessageResponse>, EdgeError> {
    let encoded = EncodedPassword::encode(&body.password);

    state
        .store
        .insert_credential(&body.email, encoded.as_str())
        .await
        .map_err(|e| {
            warn!(error = %e, "registration insert failed");
            EdgeError::Registration(e)
        })?;

    info!("registered new credential");
    Ok(Json(MessageResponse::new("Registration successful")))
}

/// POST /api/login -> issues a one-hour token when the encoded password matches.
pub async fn login_handler(
    State(state): State<EdgeState>,
    JsonBody(body): JsonBody<CredentialsPayload>,
) -> Result<Json<TokenResponse>, EdgeError> {
    let encoded = EncodedPassword::encode(&body.password);

    let record = state
        .store
        .find_credential(&body.email)
        .await
        .map_err(|e| {
            warn!(error = %e, "credential lookup failed");
            EdgeError::Login(e)
        })?;

    match record {
        Some(cred) if encoded.matches(cred.pass.as_deref()) => {
            let token = token::issue(&body.email, Utc::now().timestamp_millis());
            Ok(Json(TokenResponse { token }))
        }
        _ => Err(EdgeError::InvalidCredentials),
    }
}

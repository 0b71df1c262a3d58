use serde::{Deserialize, Serialize};

use crate::db::AccessQueryResult;

/// Body of `/api/register` and `/api/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialsPayload {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct AccessesResponse {
    pub results: AccessQueryResult,
}

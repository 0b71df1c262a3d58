use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use sqlx::Error as SqlxError;
use std::any::Any;
use thiserror::Error as ThisError;
use tracing::{debug, error};

#[derive(Debug, ThisError)]
pub enum EdgeError {
    #[error("Route not found")]
    RouteNotFound,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid or expired token")]
    InvalidToken,

    /// Request body could not be read or decoded into the expected shape.
    #[error("{0}")]
    MalformedBody(String),

    #[error("Authorization header is missing a token")]
    MalformedAuthorization,

    #[error("Registration error: {0}")]
    Registration(#[source] SqlxError),

    #[error("Login error: {0}")]
    Login(#[source] SqlxError),

    #[error("Error fetching access data: {0}")]
    AccessListing(#[source] SqlxError),

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A handler panicked; carries the panic payload when it is a string.
    #[error("{0}")]
    Panicked(String),
}

impl EdgeError {
    pub fn status(&self) -> StatusCode {
        match self {
            EdgeError::RouteNotFound => StatusCode::NOT_FOUND,
            EdgeError::Unauthorized | EdgeError::InvalidCredentials | EdgeError::InvalidToken => {
                StatusCode::UNAUTHORIZED
            }
            EdgeError::MalformedBody(_)
            | EdgeError::MalformedAuthorization
            | EdgeError::Registration(_)
            | EdgeError::Login(_)
            | EdgeError::AccessListing(_)
            | EdgeError::Database(_)
            | EdgeError::Io(_)
            | EdgeError::Panicked(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for EdgeError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        match &self {
            // Store faults are already reported by the handler that hit them.
            EdgeError::Registration(_) | EdgeError::Login(_) | EdgeError::AccessListing(_) => {}
            _ if status.is_server_error() => error!(error = %self, "unhandled request error"),
            _ => debug!(status = %status, error = %self, "request rejected"),
        }
        (
            status,
            Json(ApiErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Panic hook for `CatchPanicLayer`: a panicking handler still answers with
/// the usual `{"error": ...}` 500.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "Unknown panic".to_string()
    };
    EdgeError::Panicked(message).into_response()
}

/// `{"error": "<message>"}`, the only error shape this service emits.
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub error: String,
}

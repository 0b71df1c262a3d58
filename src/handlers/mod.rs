pub mod accesses;
pub mod auth;
pub mod dashboard;

pub use accesses::accesses_handler;
pub use auth::{login_handler, register_handler};
pub use dashboard::dashboard_handler;

use crate::EdgeError;

/// Fallback for every path without a handler.
pub async fn not_found_handler() -> EdgeError {
    EdgeError::RouteNotFound
}

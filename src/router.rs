use axum::{Router, middleware, routing::any};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::db::AuthStore;
use crate::error::panic_response;
use crate::handlers::{
    accesses_handler, dashboard_handler, login_handler, not_found_handler, register_handler,
};
use crate::middleware::cors::{apply_cors_headers, intercept_options};

#[derive(Clone)]
pub struct EdgeState {
    pub store: AuthStore,
}

impl EdgeState {
    pub fn new(store: AuthStore) -> Self {
        Self { store }
    }
}

/// Exact-path dispatch, for any method.
pub fn edge_router(state: EdgeState) -> Router {
    let routes = Router::new()
        .route("/api/login", any(login_handler))
        .route("/api/register", any(register_handler))
        .route("/dashboard", any(dashboard_handler))
        .route("/api/acessos", any(accesses_handler))
        .fallback(not_found_handler);
    with_boundary_layers(routes).with_state(state)
}

/// Layers run outermost first: request tracing, the global `OPTIONS`
/// short-circuit, CORS stamping, then panic recovery so that a panicking
/// handler still gets the JSON 500 and the CORS headers.
fn with_boundary_layers<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::map_response(apply_cors_headers))
        .layer(middleware::from_fn(intercept_options))
        .layer(TraceLayer::new_for_http())
}

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Static CORS header set attached to every non-preflight response.
pub fn cors_headers() -> [(HeaderName, HeaderValue); 3] {
    [
        (
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ),
        (
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, POST, OPTIONS"),
        ),
        (
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type, Authorization"),
        ),
    ]
}

/// `Allow` value for an `OPTIONS` request that is not a CORS preflight.
pub const ALLOWED_METHODS: &str = "GET, HEAD, POST, OPTIONS";

/// A browser preflight carries all three of these headers.
pub fn is_cors_preflight(headers: &HeaderMap) -> bool {
    headers.contains_key(header::ORIGIN)
        && headers.contains_key(header::ACCESS_CONTROL_REQUEST_METHOD)
        && headers.contains_key(header::ACCESS_CONTROL_REQUEST_HEADERS)
}

/// Answer an `OPTIONS` request without touching any handler.
pub fn preflight_response(headers: &HeaderMap) -> Response {
    if is_cors_preflight(headers) {
        (StatusCode::NO_CONTENT, cors_headers()).into_response()
    } else {
        (
            StatusCode::OK,
            [(header::ALLOW, HeaderValue::from_static(ALLOWED_METHODS))],
        )
            .into_response()
    }
}

/// Outermost layer: every `OPTIONS` request is answered here, before routing.
pub async fn intercept_options(req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        return preflight_response(req.headers());
    }
    next.run(req).await
}

/// Stamp the CORS header set onto a routed response, success or error alike.
pub async fn apply_cors_headers(mut resp: Response) -> Response {
    let headers = resp.headers_mut();
    for (name, value) in cors_headers() {
        headers.insert(name, value);
    }
    resp
}

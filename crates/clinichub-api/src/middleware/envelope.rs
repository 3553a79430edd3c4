//! Top-level error-translation middleware.
//!
//! Handlers cannot see the request path, so [`crate::error::ApiError`]
//! renders a body with an empty `path` and stashes itself in the
//! response extensions. This layer sits above everything else in the
//! stack (except the auth filter's short-circuit, which fills the path
//! itself) and rewrites the body with the real path.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::error::{ApiError, error_response};

/// Fills the request path into structured error bodies.
pub async fn error_envelope(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    let mut response = next.run(request).await;

    if let Some(error) = response.extensions_mut().remove::<ApiError>() {
        return error_response(&error, &path);
    }

    response
}

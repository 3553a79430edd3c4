//! Token-validation middleware (the request filter).
//!
//! Runs once per request, ahead of every handler. A missing cookie
//! forwards the request unauthenticated and lets the route guard decide;
//! an invalid cookie short-circuits with 401. Because this filter runs
//! before the error-envelope layer, it renders the structured error body
//! inline.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::CookieJar;

use clinichub_service::context::RequestContext;

use crate::error::{ApiError, error_response};
use crate::state::AppState;

/// Validates the token cookie and binds the principal to the request.
pub async fn authenticate(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(cookie) = jar.get(&state.config.auth.cookie_name) else {
        // No token: pass through; downstream authorization decides.
        return next.run(request).await;
    };

    match state.token_validator.validate(cookie.value()) {
        Ok(claims) => {
            let ctx = RequestContext::new(claims.sub.clone(), claims.authority_set());
            request.extensions_mut().insert(ctx);
            next.run(request).await
        }
        Err(err) => {
            // Terminal state: the request never reaches handler logic.
            let path = request.uri().path().to_string();
            tracing::debug!(path = %path, error = %err, "Rejected invalid token");
            error_response(&ApiError::new(err), &path)
        }
    }
}

//! Maps domain `AppError` to HTTP responses.
//!
//! Handlers return [`ApiError`]; its `IntoResponse` impl renders the
//! structured error body and stashes a copy of the error in the response
//! extensions so the top-level envelope middleware can fill in the
//! request path (handlers do not know it).

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use clinichub_core::error::{AppError, ErrorKind};
use clinichub_core::types::response::ApiErrorBody;

/// API-boundary error wrapper around [`AppError`] with optional detail
/// lines for the error body.
#[derive(Debug, Clone)]
pub struct ApiError {
    /// The underlying application error.
    pub inner: AppError,
    /// Detail lines rendered into the error body.
    pub details: Vec<String>,
}

impl ApiError {
    /// Wraps an application error with no extra details.
    pub fn new(inner: AppError) -> Self {
        Self {
            inner,
            details: Vec::new(),
        }
    }
}

impl From<AppError> for ApiError {
    fn from(inner: AppError) -> Self {
        Self::new(inner)
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    format!("{field}: {message}")
                })
            })
            .collect();

        Self {
            inner: AppError::validation("Request validation failed"),
            details,
        }
    }
}

/// HTTP status for an error kind.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Authentication => StatusCode::UNAUTHORIZED,
        ErrorKind::Disabled => StatusCode::FORBIDDEN,
        ErrorKind::Authorization => StatusCode::FORBIDDEN,
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::Database | ErrorKind::Configuration | ErrorKind::Internal => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Renders the structured error body for an error at a known path.
pub fn error_response(error: &ApiError, path: &str) -> Response {
    let status = status_for(error.inner.kind);

    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(error = %error.inner, path, "Internal server error");
    }

    let body = ApiErrorBody::new(error.inner.kind.to_string(), &error.inner.message, path)
        .with_details(error.details.clone());

    (status, Json(body)).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Path is unknown here; the envelope middleware rewrites the body
        // with the real request path using the stashed copy.
        let mut response = error_response(&self, "");
        response.extensions_mut().insert(self);
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(ErrorKind::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_for(ErrorKind::Authentication), StatusCode::UNAUTHORIZED);
        assert_eq!(status_for(ErrorKind::Disabled), StatusCode::FORBIDDEN);
        assert_eq!(status_for(ErrorKind::Authorization), StatusCode::FORBIDDEN);
        assert_eq!(status_for(ErrorKind::Validation), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorKind::Conflict), StatusCode::CONFLICT);
        assert_eq!(
            status_for(ErrorKind::Database),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_into_response_stashes_error() {
        let response = ApiError::new(AppError::not_found("missing")).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.extensions().get::<ApiError>().is_some());
    }
}

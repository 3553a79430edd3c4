//! `CurrentUser` extractor — reads the principal bound by the auth filter.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use clinichub_core::error::AppError;
use clinichub_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated principal available in handlers.
///
/// The token-validation middleware inserts the [`RequestContext`] into
/// the request extensions; this extractor only reads it back. A handler
/// taking `CurrentUser` therefore rejects unauthenticated requests even
/// on routes the guard table leaves public.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub RequestContext);

impl CurrentUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for CurrentUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<RequestContext>()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| ApiError::new(AppError::authentication("Authentication required")))
    }
}

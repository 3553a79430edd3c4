//! Admin user management — listing, suspension, reactivation.

use axum::Json;
use axum::extract::{Path, Query, State};

use clinichub_core::types::pagination::PageResponse;

use crate::dto::request::SuspendRequest;
use crate::dto::response::{ApiResponse, MessageResponse, SuspensionResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::{CurrentUser, PaginationParams};
use crate::state::AppState;

/// GET /api/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<UserResponse>>>, ApiError> {
    let page = state
        .admin_user_service
        .list_users(user.context(), pagination.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page.map(UserResponse::from))))
}

/// GET /api/admin/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let target = state.admin_user_service.get_user(user.context(), id).await?;
    Ok(Json(ApiResponse::ok(UserResponse::from(target))))
}

/// POST /api/admin/users/{id}/suspend
pub async fn suspend_user(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(req): Json<SuspendRequest>,
) -> Result<Json<ApiResponse<SuspensionResponse>>, ApiError> {
    let receipt = state
        .admin_user_service
        .suspend_user(user.context(), id, req.duration, req.unit)
        .await?;

    let message = format!(
        "User {} suspended until {} ({} seconds remaining)",
        receipt.user_id,
        receipt.suspension_end.to_rfc3339(),
        receipt.remaining_seconds
    );

    Ok(Json(ApiResponse::ok(SuspensionResponse {
        user_id: receipt.user_id,
        suspension_end: receipt.suspension_end,
        remaining_seconds: receipt.remaining_seconds,
        message,
    })))
}

/// POST /api/admin/users/{id}/activate
pub async fn activate_user(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state
        .admin_user_service
        .activate_user(user.context(), id)
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: format!("User {id} reactivated"),
    })))
}

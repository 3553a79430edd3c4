//! Receptionist handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use validator::Validate;

use clinichub_core::types::pagination::PageResponse;
use clinichub_entity::receptionist::{Receptionist, UpdateReceptionist};
use clinichub_service::receptionist::RegisterReceptionist;

use crate::dto::request::{RegisterReceptionistRequest, UpdateReceptionistRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{CurrentUser, PaginationParams};
use crate::state::AppState;

/// GET /api/receptionists
pub async fn list_receptionists(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Receptionist>>>, ApiError> {
    let page = state
        .receptionist_service
        .list(user.context(), pagination.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/receptionists/{id}
pub async fn get_receptionist(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Receptionist>>, ApiError> {
    let receptionist = state.receptionist_service.get(user.context(), id).await?;
    Ok(Json(ApiResponse::ok(receptionist)))
}

/// POST /api/receptionists
pub async fn create_receptionist(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<RegisterReceptionistRequest>,
) -> Result<Json<ApiResponse<Receptionist>>, ApiError> {
    req.validate()?;

    let receptionist = state
        .receptionist_service
        .register(
            user.context(),
            RegisterReceptionist {
                email: req.email,
                password: req.password,
                first_name: req.first_name,
                last_name: req.last_name,
                phone: req.phone,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(receptionist)))
}

/// PUT /api/receptionists/{id}
pub async fn update_receptionist(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(req): Json<UpdateReceptionistRequest>,
) -> Result<Json<ApiResponse<Receptionist>>, ApiError> {
    let receptionist = state
        .receptionist_service
        .update(
            user.context(),
            id,
            UpdateReceptionist {
                first_name: req.first_name,
                last_name: req.last_name,
                phone: req.phone,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(receptionist)))
}

/// DELETE /api/receptionists/{id}
pub async fn delete_receptionist(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.receptionist_service.delete(user.context(), id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: format!("Receptionist {id} deleted"),
    })))
}

//! School handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use validator::Validate;

use clinichub_core::types::pagination::PageResponse;
use clinichub_entity::school::{CreateSchool, School, UpdateSchool};

use crate::dto::request::{CreateSchoolRequest, UpdateSchoolRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{CurrentUser, PaginationParams};
use crate::state::AppState;

/// GET /api/schools
pub async fn list_schools(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<School>>>, ApiError> {
    let page = state
        .school_service
        .list(user.context(), pagination.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/schools/{id}
pub async fn get_school(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<School>>, ApiError> {
    let school = state.school_service.get(user.context(), id).await?;
    Ok(Json(ApiResponse::ok(school)))
}

/// POST /api/schools
pub async fn create_school(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<CreateSchoolRequest>,
) -> Result<Json<ApiResponse<School>>, ApiError> {
    req.validate()?;

    let school = state
        .school_service
        .create(
            user.context(),
            CreateSchool {
                name: req.name,
                address: req.address,
                phone: req.phone,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(school)))
}

/// PUT /api/schools/{id}
pub async fn update_school(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(req): Json<UpdateSchoolRequest>,
) -> Result<Json<ApiResponse<School>>, ApiError> {
    let school = state
        .school_service
        .update(
            user.context(),
            id,
            UpdateSchool {
                name: req.name,
                address: req.address,
                phone: req.phone,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(school)))
}

/// DELETE /api/schools/{id}
pub async fn delete_school(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.school_service.delete(user.context(), id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: format!("School {id} deleted"),
    })))
}

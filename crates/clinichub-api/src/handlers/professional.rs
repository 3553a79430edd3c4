//! Professional handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use validator::Validate;

use clinichub_core::types::pagination::PageResponse;
use clinichub_entity::professional::{Professional, UpdateProfessional};
use clinichub_service::professional::RegisterProfessional;

use crate::dto::request::{RegisterProfessionalRequest, UpdateProfessionalRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{CurrentUser, PaginationParams};
use crate::state::AppState;

/// GET /api/professionals
pub async fn list_professionals(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Professional>>>, ApiError> {
    let page = state
        .professional_service
        .list(user.context(), pagination.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/professionals/{id}
pub async fn get_professional(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Professional>>, ApiError> {
    let professional = state.professional_service.get(user.context(), id).await?;
    Ok(Json(ApiResponse::ok(professional)))
}

/// POST /api/professionals
pub async fn create_professional(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<RegisterProfessionalRequest>,
) -> Result<Json<ApiResponse<Professional>>, ApiError> {
    req.validate()?;

    let professional = state
        .professional_service
        .register(
            user.context(),
            RegisterProfessional {
                email: req.email,
                password: req.password,
                first_name: req.first_name,
                last_name: req.last_name,
                license_number: req.license_number,
                specialty: req.specialty,
                phone: req.phone,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(professional)))
}

/// PUT /api/professionals/{id}
pub async fn update_professional(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(req): Json<UpdateProfessionalRequest>,
) -> Result<Json<ApiResponse<Professional>>, ApiError> {
    let professional = state
        .professional_service
        .update(
            user.context(),
            id,
            UpdateProfessional {
                first_name: req.first_name,
                last_name: req.last_name,
                specialty: req.specialty,
                phone: req.phone,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(professional)))
}

/// DELETE /api/professionals/{id}
pub async fn delete_professional(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.professional_service.delete(user.context(), id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: format!("Professional {id} deleted"),
    })))
}

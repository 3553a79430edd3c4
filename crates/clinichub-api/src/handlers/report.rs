//! Clinical report handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use validator::Validate;

use clinichub_core::types::pagination::PageResponse;
use clinichub_entity::report::{ClinicalReport, CreateReport};

use crate::dto::request::CreateReportRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{CurrentUser, PaginationParams};
use crate::state::AppState;

/// GET /api/reports/record/{record_id}
pub async fn list_reports_for_record(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(record_id): Path<i64>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<ClinicalReport>>>, ApiError> {
    let page = state
        .report_service
        .list_for_record(user.context(), record_id, pagination.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/reports/{id}
pub async fn get_report(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<ClinicalReport>>, ApiError> {
    let report = state.report_service.get(user.context(), id).await?;
    Ok(Json(ApiResponse::ok(report)))
}

/// POST /api/reports
pub async fn create_report(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<CreateReportRequest>,
) -> Result<Json<ApiResponse<ClinicalReport>>, ApiError> {
    req.validate()?;

    let report = state
        .report_service
        .create(
            user.context(),
            CreateReport {
                record_id: req.record_id,
                professional_id: req.professional_id,
                title: req.title,
                body: req.body,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(report)))
}

/// DELETE /api/reports/{id}
pub async fn delete_report(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.report_service.delete(user.context(), id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: format!("Clinical report {id} deleted"),
    })))
}

//! Medical record handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use validator::Validate;

use clinichub_core::types::pagination::PageResponse;
use clinichub_entity::record::{
    CreateDiagnosis, CreateFollowUp, CreateRecord, Diagnosis, FollowUpEntry, MedicalRecord,
    RecordFilter,
};
use clinichub_service::record::RecordWithDetails;

use crate::dto::request::{
    AddDiagnosisRequest, AddFollowUpRequest, OpenRecordRequest, RecordHistoryQuery,
    UpdateRecordNotesRequest,
};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{CurrentUser, PaginationParams};
use crate::state::AppState;

/// GET /api/records — clinical-history query with optional filters.
pub async fn list_records(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(filter): Query<RecordHistoryQuery>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<MedicalRecord>>>, ApiError> {
    let page = state
        .record_service
        .history(
            user.context(),
            RecordFilter {
                patient_id: filter.patient_id,
                professional_id: filter.professional_id,
                opened_from: filter.opened_from,
                opened_to: filter.opened_to,
            },
            pagination.into_page_request(),
        )
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/records/{id}
pub async fn get_record(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<RecordWithDetails>>, ApiError> {
    let record = state.record_service.get(user.context(), id).await?;
    Ok(Json(ApiResponse::ok(record)))
}

/// POST /api/records
pub async fn open_record(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<OpenRecordRequest>,
) -> Result<Json<ApiResponse<MedicalRecord>>, ApiError> {
    let record = state
        .record_service
        .open(
            user.context(),
            CreateRecord {
                patient_id: req.patient_id,
                professional_id: req.professional_id,
                notes: req.notes,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(record)))
}

/// PUT /api/records/{id}/notes
pub async fn update_notes(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(req): Json<UpdateRecordNotesRequest>,
) -> Result<Json<ApiResponse<MedicalRecord>>, ApiError> {
    let record = state
        .record_service
        .update_notes(user.context(), id, req.notes)
        .await?;
    Ok(Json(ApiResponse::ok(record)))
}

/// POST /api/records/{id}/diagnoses
pub async fn add_diagnosis(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(req): Json<AddDiagnosisRequest>,
) -> Result<Json<ApiResponse<Diagnosis>>, ApiError> {
    req.validate()?;

    let diagnosis = state
        .record_service
        .add_diagnosis(
            user.context(),
            id,
            CreateDiagnosis {
                code: req.code,
                description: req.description,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(diagnosis)))
}

/// POST /api/records/{id}/follow-ups
pub async fn add_follow_up(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(req): Json<AddFollowUpRequest>,
) -> Result<Json<ApiResponse<FollowUpEntry>>, ApiError> {
    req.validate()?;

    let entry = state
        .record_service
        .add_follow_up(
            user.context(),
            id,
            CreateFollowUp {
                professional_id: req.professional_id,
                note: req.note,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(entry)))
}

/// DELETE /api/records/{id}
pub async fn delete_record(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.record_service.delete(user.context(), id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: format!("Medical record {id} deleted"),
    })))
}

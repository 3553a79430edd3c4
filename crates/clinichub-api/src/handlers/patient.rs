//! Patient handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use validator::Validate;

use clinichub_core::types::pagination::PageResponse;
use clinichub_entity::patient::{MedicalBackground, Patient, UpdatePatient, UpsertBackground};
use clinichub_service::patient::RegisterPatient;

use crate::dto::request::{
    RegisterPatientRequest, SearchQuery, UpdatePatientRequest, UpsertBackgroundRequest,
};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{CurrentUser, PaginationParams};
use crate::state::AppState;

/// GET /api/patients
pub async fn list_patients(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Patient>>>, ApiError> {
    let page = state
        .patient_service
        .list(user.context(), pagination.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/patients/search
pub async fn search_patients(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(search): Query<SearchQuery>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Patient>>>, ApiError> {
    let page = state
        .patient_service
        .search(user.context(), &search.q, pagination.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/patients/{id}
pub async fn get_patient(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Patient>>, ApiError> {
    let patient = state.patient_service.get(user.context(), id).await?;
    Ok(Json(ApiResponse::ok(patient)))
}

/// POST /api/patients — front-desk registration.
pub async fn create_patient(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<RegisterPatientRequest>,
) -> Result<Json<ApiResponse<Patient>>, ApiError> {
    req.validate()?;
    user.context().require_authority("patient:write")?;

    let patient = state
        .patient_service
        .register(RegisterPatient {
            email: req.email,
            password: req.password,
            first_name: req.first_name,
            last_name: req.last_name,
            document_number: req.document_number,
            birth_date: req.birth_date,
            phone: req.phone,
            address: req.address,
            school_id: req.school_id,
        })
        .await?;
    Ok(Json(ApiResponse::ok(patient)))
}

/// PUT /api/patients/{id}
pub async fn update_patient(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(req): Json<UpdatePatientRequest>,
) -> Result<Json<ApiResponse<Patient>>, ApiError> {
    let patient = state
        .patient_service
        .update(
            user.context(),
            id,
            UpdatePatient {
                first_name: req.first_name,
                last_name: req.last_name,
                phone: req.phone,
                address: req.address,
                school_id: req.school_id,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(patient)))
}

/// DELETE /api/patients/{id}
pub async fn delete_patient(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.patient_service.delete(user.context(), id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: format!("Patient {id} deleted"),
    })))
}

/// GET /api/patients/{id}/background
pub async fn get_background(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<MedicalBackground>>, ApiError> {
    let background = state
        .patient_service
        .get_background(user.context(), id)
        .await?;
    Ok(Json(ApiResponse::ok(background)))
}

/// PUT /api/patients/{id}/background
pub async fn upsert_background(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(req): Json<UpsertBackgroundRequest>,
) -> Result<Json<ApiResponse<MedicalBackground>>, ApiError> {
    let background = state
        .patient_service
        .upsert_background(
            user.context(),
            id,
            UpsertBackground {
                allergies: req.allergies,
                medications: req.medications,
                family_history: req.family_history,
                notes: req.notes,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(background)))
}

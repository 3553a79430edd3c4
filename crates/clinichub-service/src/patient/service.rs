//! Patient registration, CRUD, search, and medical backgrounds.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use clinichub_core::error::AppError;
use clinichub_core::types::pagination::{PageRequest, PageResponse};
use clinichub_database::repositories::patient::PatientRepository;
use clinichub_database::repositories::school::SchoolRepository;
use clinichub_entity::patient::{
    CreatePatient, MedicalBackground, Patient, UpdatePatient, UpsertBackground,
};
use clinichub_entity::user::role::ROLE_PATIENT;

use crate::context::RequestContext;
use crate::identity::IdentityService;

/// Data for the patient registration flow (identity + patient row).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterPatient {
    /// Login email for the new identity.
    pub email: String,
    /// Initial password.
    pub password: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// National document number (unique).
    pub document_number: String,
    /// Date of birth.
    pub birth_date: NaiveDate,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Postal address.
    pub address: Option<String>,
    /// School the patient attends, if any.
    pub school_id: Option<i64>,
}

/// Handles patient lifecycle and lookups.
#[derive(Debug, Clone)]
pub struct PatientService {
    /// Patient repository.
    patient_repo: Arc<PatientRepository>,
    /// School repository (enrollment checks).
    school_repo: Arc<SchoolRepository>,
    /// Identity creation for registration.
    identity: Arc<IdentityService>,
}

impl PatientService {
    /// Creates a new patient service.
    pub fn new(
        patient_repo: Arc<PatientRepository>,
        school_repo: Arc<SchoolRepository>,
        identity: Arc<IdentityService>,
    ) -> Self {
        Self {
            patient_repo,
            school_repo,
            identity,
        }
    }

    /// Registers a patient together with their identity record.
    ///
    /// Used both by self-registration (no context) and by front-desk
    /// staff; the caller decides which route exposes it.
    pub async fn register(&self, req: RegisterPatient) -> Result<Patient, AppError> {
        if req.first_name.trim().is_empty() || req.last_name.trim().is_empty() {
            return Err(AppError::validation("First and last name are required"));
        }

        if self
            .patient_repo
            .find_by_document(&req.document_number)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(format!(
                "Document number '{}' is already registered",
                req.document_number
            )));
        }

        if let Some(school_id) = req.school_id {
            self.school_repo
                .find_by_id(school_id)
                .await?
                .ok_or_else(|| AppError::validation(format!("School {school_id} not found")))?;
        }

        let user = self
            .identity
            .create_identity(&req.email, &req.password, ROLE_PATIENT)
            .await?;

        let patient = self
            .patient_repo
            .create(&CreatePatient {
                user_id: user.id,
                first_name: req.first_name,
                last_name: req.last_name,
                document_number: req.document_number,
                birth_date: req.birth_date,
                phone: req.phone,
                address: req.address,
                school_id: req.school_id,
            })
            .await?;

        info!(patient_id = patient.id, user_id = user.id, "Patient registered");

        Ok(patient)
    }

    /// Gets a patient by ID.
    pub async fn get(&self, ctx: &RequestContext, id: i64) -> Result<Patient, AppError> {
        ctx.require_authority("patient:read")?;

        self.patient_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Patient {id} not found")))
    }

    /// Lists patients with pagination.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> Result<PageResponse<Patient>, AppError> {
        ctx.require_authority("patient:read")?;
        self.patient_repo.find_all(&page).await
    }

    /// Searches patients by name fragment or document number.
    pub async fn search(
        &self,
        ctx: &RequestContext,
        query: &str,
        page: PageRequest,
    ) -> Result<PageResponse<Patient>, AppError> {
        ctx.require_authority("patient:read")?;

        let query = query.trim();
        if query.is_empty() {
            return self.patient_repo.find_all(&page).await;
        }
        self.patient_repo.search(query, &page).await
    }

    /// Updates a patient's mutable fields.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: i64,
        data: UpdatePatient,
    ) -> Result<Patient, AppError> {
        ctx.require_authority("patient:write")?;

        if let Some(Some(school_id)) = data.school_id {
            self.school_repo
                .find_by_id(school_id)
                .await?
                .ok_or_else(|| AppError::validation(format!("School {school_id} not found")))?;
        }

        let patient = self.patient_repo.update(id, &data).await?;
        info!(patient_id = id, actor = %ctx.email, "Patient updated");
        Ok(patient)
    }

    /// Deletes a patient.
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> Result<(), AppError> {
        ctx.require_authority("patient:write")?;

        if !self.patient_repo.delete(id).await? {
            return Err(AppError::not_found(format!("Patient {id} not found")));
        }
        info!(patient_id = id, actor = %ctx.email, "Patient deleted");
        Ok(())
    }

    /// Fetches a patient's medical background.
    pub async fn get_background(
        &self,
        ctx: &RequestContext,
        patient_id: i64,
    ) -> Result<MedicalBackground, AppError> {
        ctx.require_authority("patient:read")?;

        self.patient_repo
            .find_background(patient_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!(
                    "No medical background recorded for patient {patient_id}"
                ))
            })
    }

    /// Creates or replaces a patient's medical background.
    pub async fn upsert_background(
        &self,
        ctx: &RequestContext,
        patient_id: i64,
        data: UpsertBackground,
    ) -> Result<MedicalBackground, AppError> {
        ctx.require_authority("patient:write")?;

        // The upsert would otherwise surface a foreign-key error.
        self.patient_repo
            .find_by_id(patient_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Patient {patient_id} not found")))?;

        let background = self
            .patient_repo
            .upsert_background(patient_id, &data)
            .await?;
        info!(patient_id, actor = %ctx.email, "Medical background saved");
        Ok(background)
    }
}

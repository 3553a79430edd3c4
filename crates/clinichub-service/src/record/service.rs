//! Medical record lifecycle: open, read, diagnoses, follow-ups, history.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use clinichub_core::error::AppError;
use clinichub_core::types::pagination::{PageRequest, PageResponse};
use clinichub_database::repositories::patient::PatientRepository;
use clinichub_database::repositories::professional::ProfessionalRepository;
use clinichub_database::repositories::record::RecordRepository;
use clinichub_entity::record::{
    CreateDiagnosis, CreateFollowUp, CreateRecord, Diagnosis, FollowUpEntry, MedicalRecord,
    RecordFilter,
};

use crate::context::RequestContext;

/// A medical record with its diagnoses and follow-up entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordWithDetails {
    /// The record itself.
    #[serde(flatten)]
    pub record: MedicalRecord,
    /// Diagnoses, oldest first.
    pub diagnoses: Vec<Diagnosis>,
    /// Follow-up entries, oldest first.
    pub follow_ups: Vec<FollowUpEntry>,
}

/// Handles medical records and their child entries.
#[derive(Debug, Clone)]
pub struct RecordService {
    /// Record repository.
    record_repo: Arc<RecordRepository>,
    /// Patient repository (existence checks).
    patient_repo: Arc<PatientRepository>,
    /// Professional repository (existence checks).
    professional_repo: Arc<ProfessionalRepository>,
}

impl RecordService {
    /// Creates a new record service.
    pub fn new(
        record_repo: Arc<RecordRepository>,
        patient_repo: Arc<PatientRepository>,
        professional_repo: Arc<ProfessionalRepository>,
    ) -> Self {
        Self {
            record_repo,
            patient_repo,
            professional_repo,
        }
    }

    /// Opens a new medical record for a patient.
    pub async fn open(
        &self,
        ctx: &RequestContext,
        data: CreateRecord,
    ) -> Result<MedicalRecord, AppError> {
        ctx.require_authority("record:write")?;

        self.patient_repo
            .find_by_id(data.patient_id)
            .await?
            .ok_or_else(|| AppError::validation(format!("Patient {} not found", data.patient_id)))?;

        self.professional_repo
            .find_by_id(data.professional_id)
            .await?
            .ok_or_else(|| {
                AppError::validation(format!("Professional {} not found", data.professional_id))
            })?;

        let record = self.record_repo.create(&data).await?;
        info!(
            record_id = record.id,
            patient_id = record.patient_id,
            actor = %ctx.email,
            "Medical record opened"
        );
        Ok(record)
    }

    /// Gets a record with its diagnoses and follow-up entries.
    pub async fn get(&self, ctx: &RequestContext, id: i64) -> Result<RecordWithDetails, AppError> {
        ctx.require_authority("record:read")?;

        let record = self
            .record_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Medical record {id} not found")))?;

        let diagnoses = self.record_repo.diagnoses(id).await?;
        let follow_ups = self.record_repo.follow_ups(id).await?;

        Ok(RecordWithDetails {
            record,
            diagnoses,
            follow_ups,
        })
    }

    /// Clinical-history query over the optional filter predicates.
    pub async fn history(
        &self,
        ctx: &RequestContext,
        filter: RecordFilter,
        page: PageRequest,
    ) -> Result<PageResponse<MedicalRecord>, AppError> {
        ctx.require_authority("record:read")?;
        self.record_repo.find_filtered(&filter, &page).await
    }

    /// Updates a record's notes.
    pub async fn update_notes(
        &self,
        ctx: &RequestContext,
        id: i64,
        notes: Option<String>,
    ) -> Result<MedicalRecord, AppError> {
        ctx.require_authority("record:write")?;

        let record = self.record_repo.update_notes(id, notes.as_deref()).await?;
        info!(record_id = id, actor = %ctx.email, "Record notes updated");
        Ok(record)
    }

    /// Attaches a diagnosis to a record.
    pub async fn add_diagnosis(
        &self,
        ctx: &RequestContext,
        record_id: i64,
        data: CreateDiagnosis,
    ) -> Result<Diagnosis, AppError> {
        ctx.require_authority("record:write")?;

        if data.code.trim().is_empty() {
            return Err(AppError::validation("Diagnosis code is required"));
        }

        self.record_repo
            .find_by_id(record_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Medical record {record_id} not found")))?;

        let diagnosis = self.record_repo.add_diagnosis(record_id, &data).await?;
        info!(
            record_id,
            diagnosis_id = diagnosis.id,
            actor = %ctx.email,
            "Diagnosis added"
        );
        Ok(diagnosis)
    }

    /// Appends a follow-up entry to a record.
    pub async fn add_follow_up(
        &self,
        ctx: &RequestContext,
        record_id: i64,
        data: CreateFollowUp,
    ) -> Result<FollowUpEntry, AppError> {
        ctx.require_authority("record:write")?;

        if data.note.trim().is_empty() {
            return Err(AppError::validation("Follow-up note is required"));
        }

        self.record_repo
            .find_by_id(record_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Medical record {record_id} not found")))?;

        self.professional_repo
            .find_by_id(data.professional_id)
            .await?
            .ok_or_else(|| {
                AppError::validation(format!("Professional {} not found", data.professional_id))
            })?;

        let entry = self.record_repo.add_follow_up(record_id, &data).await?;
        info!(
            record_id,
            entry_id = entry.id,
            actor = %ctx.email,
            "Follow-up entry added"
        );
        Ok(entry)
    }

    /// Deletes a record (cascades to diagnoses and follow-ups).
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> Result<(), AppError> {
        ctx.require_authority("record:write")?;

        if !self.record_repo.delete(id).await? {
            return Err(AppError::not_found(format!("Medical record {id} not found")));
        }
        info!(record_id = id, actor = %ctx.email, "Medical record deleted");
        Ok(())
    }
}

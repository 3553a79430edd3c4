//! Medical record repository: records, diagnoses, and follow-up entries.

use sqlx::PgPool;

use clinichub_core::error::{AppError, ErrorKind};
use clinichub_core::result::AppResult;
use clinichub_core::types::pagination::{PageRequest, PageResponse};
use clinichub_entity::record::{
    CreateDiagnosis, CreateFollowUp, CreateRecord, Diagnosis, FollowUpEntry, MedicalRecord,
    RecordFilter,
};

/// Repository for medical records and their child entries.
#[derive(Debug, Clone)]
pub struct RecordRepository {
    pool: PgPool,
}

impl RecordRepository {
    /// Create a new record repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a record by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<MedicalRecord>> {
        sqlx::query_as::<_, MedicalRecord>("SELECT * FROM medical_records WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find record", e))
    }

    /// Clinical-history query: list records matching the optional filter
    /// predicates, newest first.
    pub async fn find_filtered(
        &self,
        filter: &RecordFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<MedicalRecord>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM medical_records \
             WHERE ($1::BIGINT IS NULL OR patient_id = $1) \
               AND ($2::BIGINT IS NULL OR professional_id = $2) \
               AND ($3::TIMESTAMPTZ IS NULL OR opened_at >= $3) \
               AND ($4::TIMESTAMPTZ IS NULL OR opened_at <= $4)",
        )
        .bind(filter.patient_id)
        .bind(filter.professional_id)
        .bind(filter.opened_from)
        .bind(filter.opened_to)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count records", e))?;

        let records = sqlx::query_as::<_, MedicalRecord>(
            "SELECT * FROM medical_records \
             WHERE ($1::BIGINT IS NULL OR patient_id = $1) \
               AND ($2::BIGINT IS NULL OR professional_id = $2) \
               AND ($3::TIMESTAMPTZ IS NULL OR opened_at >= $3) \
               AND ($4::TIMESTAMPTZ IS NULL OR opened_at <= $4) \
             ORDER BY opened_at DESC LIMIT $5 OFFSET $6",
        )
        .bind(filter.patient_id)
        .bind(filter.professional_id)
        .bind(filter.opened_from)
        .bind(filter.opened_to)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to filter records", e))?;

        Ok(PageResponse::new(
            records,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Open a new medical record.
    pub async fn create(&self, data: &CreateRecord) -> AppResult<MedicalRecord> {
        sqlx::query_as::<_, MedicalRecord>(
            "INSERT INTO medical_records (patient_id, professional_id, notes) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(data.patient_id)
        .bind(data.professional_id)
        .bind(&data.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create record", e))
    }

    /// Update a record's notes.
    pub async fn update_notes(&self, id: i64, notes: Option<&str>) -> AppResult<MedicalRecord> {
        sqlx::query_as::<_, MedicalRecord>(
            "UPDATE medical_records SET notes = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(notes)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update record", e))?
        .ok_or_else(|| AppError::not_found(format!("Medical record {id} not found")))
    }

    /// Delete a record by ID (cascades to diagnoses and follow-ups).
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM medical_records WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete record", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Diagnoses attached to a record, oldest first.
    pub async fn diagnoses(&self, record_id: i64) -> AppResult<Vec<Diagnosis>> {
        sqlx::query_as::<_, Diagnosis>(
            "SELECT * FROM diagnoses WHERE record_id = $1 ORDER BY diagnosed_at ASC",
        )
        .bind(record_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list diagnoses", e))
    }

    /// Attach a diagnosis to a record.
    pub async fn add_diagnosis(
        &self,
        record_id: i64,
        data: &CreateDiagnosis,
    ) -> AppResult<Diagnosis> {
        sqlx::query_as::<_, Diagnosis>(
            "INSERT INTO diagnoses (record_id, code, description) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(record_id)
        .bind(&data.code)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to add diagnosis", e))
    }

    /// Follow-up entries attached to a record, oldest first.
    pub async fn follow_ups(&self, record_id: i64) -> AppResult<Vec<FollowUpEntry>> {
        sqlx::query_as::<_, FollowUpEntry>(
            "SELECT * FROM follow_up_entries WHERE record_id = $1 ORDER BY created_at ASC",
        )
        .bind(record_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list follow-ups", e))
    }

    /// Append a follow-up entry to a record.
    pub async fn add_follow_up(
        &self,
        record_id: i64,
        data: &CreateFollowUp,
    ) -> AppResult<FollowUpEntry> {
        sqlx::query_as::<_, FollowUpEntry>(
            "INSERT INTO follow_up_entries (record_id, professional_id, note) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(record_id)
        .bind(data.professional_id)
        .bind(&data.note)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to add follow-up", e))
    }
}

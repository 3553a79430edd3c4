//! Patient repository implementation, including medical backgrounds.

use sqlx::PgPool;

use clinichub_core::error::{AppError, ErrorKind};
use clinichub_core::result::AppResult;
use clinichub_core::types::pagination::{PageRequest, PageResponse};
use clinichub_entity::patient::{
    CreatePatient, MedicalBackground, Patient, UpdatePatient, UpsertBackground,
};

/// Repository for patient CRUD, search, and background upserts.
#[derive(Debug, Clone)]
pub struct PatientRepository {
    pool: PgPool,
}

impl PatientRepository {
    /// Create a new patient repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a patient by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Patient>> {
        sqlx::query_as::<_, Patient>("SELECT * FROM patients WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find patient", e))
    }

    /// Find a patient by document number.
    pub async fn find_by_document(&self, document_number: &str) -> AppResult<Option<Patient>> {
        sqlx::query_as::<_, Patient>("SELECT * FROM patients WHERE document_number = $1")
            .bind(document_number)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find patient by document", e)
            })
    }

    /// Find a patient by owning user id.
    pub async fn find_by_user_id(&self, user_id: i64) -> AppResult<Option<Patient>> {
        sqlx::query_as::<_, Patient>("SELECT * FROM patients WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find patient by user", e)
            })
    }

    /// List all patients with pagination.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Patient>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM patients")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count patients", e)
            })?;

        let patients = sqlx::query_as::<_, Patient>(
            "SELECT * FROM patients ORDER BY last_name ASC, first_name ASC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list patients", e))?;

        Ok(PageResponse::new(
            patients,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Search patients by name fragment or document number.
    pub async fn search(&self, query: &str, page: &PageRequest) -> AppResult<PageResponse<Patient>> {
        let pattern = format!("%{query}%");

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM patients \
             WHERE first_name ILIKE $1 OR last_name ILIKE $1 OR document_number ILIKE $1",
        )
        .bind(&pattern)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count search results", e)
        })?;

        let patients = sqlx::query_as::<_, Patient>(
            "SELECT * FROM patients \
             WHERE first_name ILIKE $1 OR last_name ILIKE $1 OR document_number ILIKE $1 \
             ORDER BY last_name ASC, first_name ASC LIMIT $2 OFFSET $3",
        )
        .bind(&pattern)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search patients", e))?;

        Ok(PageResponse::new(
            patients,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a new patient.
    pub async fn create(&self, data: &CreatePatient) -> AppResult<Patient> {
        sqlx::query_as::<_, Patient>(
            "INSERT INTO patients \
             (user_id, first_name, last_name, document_number, birth_date, phone, address, school_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING *",
        )
        .bind(data.user_id)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.document_number)
        .bind(data.birth_date)
        .bind(&data.phone)
        .bind(&data.address)
        .bind(data.school_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("patients_document_number_key") =>
            {
                AppError::conflict(format!(
                    "Document number '{}' is already registered",
                    data.document_number
                ))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create patient", e),
        })
    }

    /// Update a patient's mutable fields.
    pub async fn update(&self, id: i64, data: &UpdatePatient) -> AppResult<Patient> {
        let school_update = data.school_id.is_some();
        let school_value = data.school_id.clone().flatten();

        sqlx::query_as::<_, Patient>(
            "UPDATE patients SET first_name = COALESCE($2, first_name), \
                                 last_name = COALESCE($3, last_name), \
                                 phone = COALESCE($4, phone), \
                                 address = COALESCE($5, address), \
                                 school_id = CASE WHEN $6 THEN $7 ELSE school_id END, \
                                 updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.phone)
        .bind(&data.address)
        .bind(school_update)
        .bind(school_value)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update patient", e))?
        .ok_or_else(|| AppError::not_found(format!("Patient {id} not found")))
    }

    /// Delete a patient by ID.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM patients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete patient", e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    /// Fetch the medical background for a patient, if recorded.
    pub async fn find_background(&self, patient_id: i64) -> AppResult<Option<MedicalBackground>> {
        sqlx::query_as::<_, MedicalBackground>(
            "SELECT * FROM medical_backgrounds WHERE patient_id = $1",
        )
        .bind(patient_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load background", e))
    }

    /// Insert or update the medical background for a patient.
    pub async fn upsert_background(
        &self,
        patient_id: i64,
        data: &UpsertBackground,
    ) -> AppResult<MedicalBackground> {
        sqlx::query_as::<_, MedicalBackground>(
            "INSERT INTO medical_backgrounds \
             (patient_id, allergies, medications, family_history, notes) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT (patient_id) DO UPDATE \
             SET allergies = EXCLUDED.allergies, \
                 medications = EXCLUDED.medications, \
                 family_history = EXCLUDED.family_history, \
                 notes = EXCLUDED.notes, \
                 updated_at = NOW() \
             RETURNING *",
        )
        .bind(patient_id)
        .bind(&data.allergies)
        .bind(&data.medications)
        .bind(&data.family_history)
        .bind(&data.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to upsert background", e))
    }
}

//! Clinical report repository implementation.

use sqlx::PgPool;

use clinichub_core::error::{AppError, ErrorKind};
use clinichub_core::result::AppResult;
use clinichub_core::types::pagination::{PageRequest, PageResponse};
use clinichub_entity::report::{ClinicalReport, CreateReport};

/// Repository for clinical reports.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    pool: PgPool,
}

impl ReportRepository {
    /// Create a new report repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a report by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<ClinicalReport>> {
        sqlx::query_as::<_, ClinicalReport>("SELECT * FROM clinical_reports WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find report", e))
    }

    /// List reports issued against a record, newest first.
    pub async fn find_by_record(
        &self,
        record_id: i64,
        page: &PageRequest,
    ) -> AppResult<PageResponse<ClinicalReport>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM clinical_reports WHERE record_id = $1")
                .bind(record_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count reports", e)
                })?;

        let reports = sqlx::query_as::<_, ClinicalReport>(
            "SELECT * FROM clinical_reports WHERE record_id = $1 \
             ORDER BY issued_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(record_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list reports", e))?;

        Ok(PageResponse::new(
            reports,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Issue a new clinical report.
    pub async fn create(&self, data: &CreateReport) -> AppResult<ClinicalReport> {
        sqlx::query_as::<_, ClinicalReport>(
            "INSERT INTO clinical_reports (record_id, professional_id, title, body) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(data.record_id)
        .bind(data.professional_id)
        .bind(&data.title)
        .bind(&data.body)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create report", e))
    }

    /// Delete a report by ID.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM clinical_reports WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete report", e))?;

        Ok(result.rows_affected() > 0)
    }
}

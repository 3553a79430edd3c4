//! Professional repository implementation.

use sqlx::PgPool;

use clinichub_core::error::{AppError, ErrorKind};
use clinichub_core::result::AppResult;
use clinichub_core::types::pagination::{PageRequest, PageResponse};
use clinichub_entity::professional::{CreateProfessional, Professional, UpdateProfessional};

/// Repository for professional CRUD operations.
#[derive(Debug, Clone)]
pub struct ProfessionalRepository {
    pool: PgPool,
}

impl ProfessionalRepository {
    /// Create a new professional repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a professional by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Professional>> {
        sqlx::query_as::<_, Professional>("SELECT * FROM professionals WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find professional", e)
            })
    }

    /// Find a professional by owning user id.
    pub async fn find_by_user_id(&self, user_id: i64) -> AppResult<Option<Professional>> {
        sqlx::query_as::<_, Professional>("SELECT * FROM professionals WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find professional by user", e)
            })
    }

    /// Find a professional by license number.
    pub async fn find_by_license(&self, license_number: &str) -> AppResult<Option<Professional>> {
        sqlx::query_as::<_, Professional>("SELECT * FROM professionals WHERE license_number = $1")
            .bind(license_number)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    "Failed to find professional by license",
                    e,
                )
            })
    }

    /// List all professionals with pagination.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Professional>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM professionals")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count professionals", e)
            })?;

        let professionals = sqlx::query_as::<_, Professional>(
            "SELECT * FROM professionals ORDER BY last_name ASC, first_name ASC \
             LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list professionals", e)
        })?;

        Ok(PageResponse::new(
            professionals,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a new professional.
    pub async fn create(&self, data: &CreateProfessional) -> AppResult<Professional> {
        sqlx::query_as::<_, Professional>(
            "INSERT INTO professionals \
             (user_id, first_name, last_name, license_number, specialty, phone) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(data.user_id)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.license_number)
        .bind(&data.specialty)
        .bind(&data.phone)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("professionals_license_number_key") =>
            {
                AppError::conflict(format!(
                    "License number '{}' is already registered",
                    data.license_number
                ))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create professional", e),
        })
    }

    /// Update a professional's mutable fields.
    pub async fn update(&self, id: i64, data: &UpdateProfessional) -> AppResult<Professional> {
        sqlx::query_as::<_, Professional>(
            "UPDATE professionals SET first_name = COALESCE($2, first_name), \
                                      last_name = COALESCE($3, last_name), \
                                      specialty = COALESCE($4, specialty), \
                                      phone = COALESCE($5, phone), \
                                      updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.specialty)
        .bind(&data.phone)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update professional", e))?
        .ok_or_else(|| AppError::not_found(format!("Professional {id} not found")))
    }

    /// Delete a professional by ID.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM professionals WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete professional", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}

//! Receptionist repository implementation.

use sqlx::PgPool;

use clinichub_core::error::{AppError, ErrorKind};
use clinichub_core::result::AppResult;
use clinichub_core::types::pagination::{PageRequest, PageResponse};
use clinichub_entity::receptionist::{CreateReceptionist, Receptionist, UpdateReceptionist};

/// Repository for receptionist CRUD operations.
#[derive(Debug, Clone)]
pub struct ReceptionistRepository {
    pool: PgPool,
}

impl ReceptionistRepository {
    /// Create a new receptionist repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a receptionist by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Receptionist>> {
        sqlx::query_as::<_, Receptionist>("SELECT * FROM receptionists WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find receptionist", e)
            })
    }

    /// List all receptionists with pagination.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Receptionist>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM receptionists")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count receptionists", e)
            })?;

        let receptionists = sqlx::query_as::<_, Receptionist>(
            "SELECT * FROM receptionists ORDER BY last_name ASC, first_name ASC \
             LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list receptionists", e)
        })?;

        Ok(PageResponse::new(
            receptionists,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a new receptionist.
    pub async fn create(&self, data: &CreateReceptionist) -> AppResult<Receptionist> {
        sqlx::query_as::<_, Receptionist>(
            "INSERT INTO receptionists (user_id, first_name, last_name, phone) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(data.user_id)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.phone)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create receptionist", e))
    }

    /// Update a receptionist's mutable fields.
    pub async fn update(&self, id: i64, data: &UpdateReceptionist) -> AppResult<Receptionist> {
        sqlx::query_as::<_, Receptionist>(
            "UPDATE receptionists SET first_name = COALESCE($2, first_name), \
                                      last_name = COALESCE($3, last_name), \
                                      phone = COALESCE($4, phone), \
                                      updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.phone)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update receptionist", e))?
        .ok_or_else(|| AppError::not_found(format!("Receptionist {id} not found")))
    }

    /// Delete a receptionist by ID.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM receptionists WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete receptionist", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}

//! School repository implementation.

use sqlx::PgPool;

use clinichub_core::error::{AppError, ErrorKind};
use clinichub_core::result::AppResult;
use clinichub_core::types::pagination::{PageRequest, PageResponse};
use clinichub_entity::school::{CreateSchool, School, UpdateSchool};

/// Repository for school CRUD operations.
#[derive(Debug, Clone)]
pub struct SchoolRepository {
    pool: PgPool,
}

impl SchoolRepository {
    /// Create a new school repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a school by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<School>> {
        sqlx::query_as::<_, School>("SELECT * FROM schools WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find school", e))
    }

    /// List all schools with pagination.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<School>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM schools")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count schools", e))?;

        let schools = sqlx::query_as::<_, School>(
            "SELECT * FROM schools ORDER BY name ASC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list schools", e))?;

        Ok(PageResponse::new(
            schools,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a new school.
    pub async fn create(&self, data: &CreateSchool) -> AppResult<School> {
        sqlx::query_as::<_, School>(
            "INSERT INTO schools (name, address, phone) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.address)
        .bind(&data.phone)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create school", e))
    }

    /// Update a school's mutable fields.
    pub async fn update(&self, id: i64, data: &UpdateSchool) -> AppResult<School> {
        sqlx::query_as::<_, School>(
            "UPDATE schools SET name = COALESCE($2, name), \
                                address = COALESCE($3, address), \
                                phone = COALESCE($4, phone) \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.address)
        .bind(&data.phone)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update school", e))?
        .ok_or_else(|| AppError::not_found(format!("School {id} not found")))
    }

    /// Delete a school by ID.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM schools WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete school", e))?;

        Ok(result.rows_affected() > 0)
    }
}

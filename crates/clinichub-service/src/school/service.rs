//! School CRUD.

use std::sync::Arc;

use tracing::info;

use clinichub_core::error::AppError;
use clinichub_core::types::pagination::{PageRequest, PageResponse};
use clinichub_database::repositories::school::SchoolRepository;
use clinichub_entity::school::{CreateSchool, School, UpdateSchool};

use crate::context::RequestContext;

/// Handles school reference-data maintenance.
#[derive(Debug, Clone)]
pub struct SchoolService {
    /// School repository.
    school_repo: Arc<SchoolRepository>,
}

impl SchoolService {
    /// Creates a new school service.
    pub fn new(school_repo: Arc<SchoolRepository>) -> Self {
        Self { school_repo }
    }

    /// Gets a school by ID.
    pub async fn get(&self, ctx: &RequestContext, id: i64) -> Result<School, AppError> {
        ctx.require_authority("patient:read")?;

        self.school_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("School {id} not found")))
    }

    /// Lists schools with pagination.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> Result<PageResponse<School>, AppError> {
        ctx.require_authority("patient:read")?;
        self.school_repo.find_all(&page).await
    }

    /// Creates a new school.
    pub async fn create(&self, ctx: &RequestContext, data: CreateSchool) -> Result<School, AppError> {
        ctx.require_authority("patient:write")?;

        if data.name.trim().is_empty() {
            return Err(AppError::validation("School name is required"));
        }

        let school = self.school_repo.create(&data).await?;
        info!(school_id = school.id, actor = %ctx.email, "School created");
        Ok(school)
    }

    /// Updates a school.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: i64,
        data: UpdateSchool,
    ) -> Result<School, AppError> {
        ctx.require_authority("patient:write")?;

        let school = self.school_repo.update(id, &data).await?;
        info!(school_id = id, actor = %ctx.email, "School updated");
        Ok(school)
    }

    /// Deletes a school.
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> Result<(), AppError> {
        ctx.require_authority("patient:write")?;

        if !self.school_repo.delete(id).await? {
            return Err(AppError::not_found(format!("School {id} not found")));
        }
        info!(school_id = id, actor = %ctx.email, "School deleted");
        Ok(())
    }
}

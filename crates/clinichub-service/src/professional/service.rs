//! Professional registration and CRUD.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use clinichub_core::error::AppError;
use clinichub_core::types::pagination::{PageRequest, PageResponse};
use clinichub_database::repositories::professional::ProfessionalRepository;
use clinichub_entity::professional::{CreateProfessional, Professional, UpdateProfessional};
use clinichub_entity::user::role::ROLE_PROFESSIONAL;

use crate::context::RequestContext;
use crate::identity::IdentityService;

/// Data for the professional registration flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterProfessional {
    /// Login email for the new identity.
    pub email: String,
    /// Initial password.
    pub password: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Professional license number (unique).
    pub license_number: String,
    /// Specialty.
    pub specialty: String,
    /// Contact phone number.
    pub phone: Option<String>,
}

/// Handles professional lifecycle and lookups.
#[derive(Debug, Clone)]
pub struct ProfessionalService {
    /// Professional repository.
    professional_repo: Arc<ProfessionalRepository>,
    /// Identity creation for registration.
    identity: Arc<IdentityService>,
}

impl ProfessionalService {
    /// Creates a new professional service.
    pub fn new(professional_repo: Arc<ProfessionalRepository>, identity: Arc<IdentityService>) -> Self {
        Self {
            professional_repo,
            identity,
        }
    }

    /// Registers a professional together with their identity record.
    pub async fn register(
        &self,
        ctx: &RequestContext,
        req: RegisterProfessional,
    ) -> Result<Professional, AppError> {
        ctx.require_authority("user:manage")?;

        if req.license_number.trim().is_empty() {
            return Err(AppError::validation("License number is required"));
        }

        if self
            .professional_repo
            .find_by_license(&req.license_number)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(format!(
                "License number '{}' is already registered",
                req.license_number
            )));
        }

        let user = self
            .identity
            .create_identity(&req.email, &req.password, ROLE_PROFESSIONAL)
            .await?;

        let professional = self
            .professional_repo
            .create(&CreateProfessional {
                user_id: user.id,
                first_name: req.first_name,
                last_name: req.last_name,
                license_number: req.license_number,
                specialty: req.specialty,
                phone: req.phone,
            })
            .await?;

        info!(
            professional_id = professional.id,
            actor = %ctx.email,
            "Professional registered"
        );

        Ok(professional)
    }

    /// Gets a professional by ID.
    pub async fn get(&self, ctx: &RequestContext, id: i64) -> Result<Professional, AppError> {
        ctx.require_authority("patient:read")?;

        self.professional_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Professional {id} not found")))
    }

    /// Lists professionals with pagination.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> Result<PageResponse<Professional>, AppError> {
        ctx.require_authority("patient:read")?;
        self.professional_repo.find_all(&page).await
    }

    /// Updates a professional's mutable fields.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: i64,
        data: UpdateProfessional,
    ) -> Result<Professional, AppError> {
        ctx.require_authority("user:manage")?;

        let professional = self.professional_repo.update(id, &data).await?;
        info!(professional_id = id, actor = %ctx.email, "Professional updated");
        Ok(professional)
    }

    /// Deletes a professional.
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> Result<(), AppError> {
        ctx.require_authority("user:manage")?;

        if !self.professional_repo.delete(id).await? {
            return Err(AppError::not_found(format!("Professional {id} not found")));
        }
        info!(professional_id = id, actor = %ctx.email, "Professional deleted");
        Ok(())
    }
}

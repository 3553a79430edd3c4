//! Receptionist registration and CRUD.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use clinichub_core::error::AppError;
use clinichub_core::types::pagination::{PageRequest, PageResponse};
use clinichub_database::repositories::receptionist::ReceptionistRepository;
use clinichub_entity::receptionist::{CreateReceptionist, Receptionist, UpdateReceptionist};
use clinichub_entity::user::role::ROLE_RECEPTIONIST;

use crate::context::RequestContext;
use crate::identity::IdentityService;

/// Data for the receptionist registration flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterReceptionist {
    /// Login email for the new identity.
    pub email: String,
    /// Initial password.
    pub password: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact phone number.
    pub phone: Option<String>,
}

/// Handles receptionist lifecycle and lookups.
#[derive(Debug, Clone)]
pub struct ReceptionistService {
    /// Receptionist repository.
    receptionist_repo: Arc<ReceptionistRepository>,
    /// Identity creation for registration.
    identity: Arc<IdentityService>,
}

impl ReceptionistService {
    /// Creates a new receptionist service.
    pub fn new(
        receptionist_repo: Arc<ReceptionistRepository>,
        identity: Arc<IdentityService>,
    ) -> Self {
        Self {
            receptionist_repo,
            identity,
        }
    }

    /// Registers a receptionist together with their identity record.
    pub async fn register(
        &self,
        ctx: &RequestContext,
        req: RegisterReceptionist,
    ) -> Result<Receptionist, AppError> {
        ctx.require_authority("user:manage")?;

        let user = self
            .identity
            .create_identity(&req.email, &req.password, ROLE_RECEPTIONIST)
            .await?;

        let receptionist = self
            .receptionist_repo
            .create(&CreateReceptionist {
                user_id: user.id,
                first_name: req.first_name,
                last_name: req.last_name,
                phone: req.phone,
            })
            .await?;

        info!(
            receptionist_id = receptionist.id,
            actor = %ctx.email,
            "Receptionist registered"
        );

        Ok(receptionist)
    }

    /// Gets a receptionist by ID.
    pub async fn get(&self, ctx: &RequestContext, id: i64) -> Result<Receptionist, AppError> {
        ctx.require_authority("user:manage")?;

        self.receptionist_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Receptionist {id} not found")))
    }

    /// Lists receptionists with pagination.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> Result<PageResponse<Receptionist>, AppError> {
        ctx.require_authority("user:manage")?;
        self.receptionist_repo.find_all(&page).await
    }

    /// Updates a receptionist's mutable fields.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: i64,
        data: UpdateReceptionist,
    ) -> Result<Receptionist, AppError> {
        ctx.require_authority("user:manage")?;

        let receptionist = self.receptionist_repo.update(id, &data).await?;
        info!(receptionist_id = id, actor = %ctx.email, "Receptionist updated");
        Ok(receptionist)
    }

    /// Deletes a receptionist.
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> Result<(), AppError> {
        ctx.require_authority("user:manage")?;

        if !self.receptionist_repo.delete(id).await? {
            return Err(AppError::not_found(format!("Receptionist {id} not found")));
        }
        info!(receptionist_id = id, actor = %ctx.email, "Receptionist deleted");
        Ok(())
    }
}

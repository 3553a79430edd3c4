//! Admin user management — listing, suspension, reactivation.

use std::sync::Arc;

use tracing::info;

use clinichub_auth::suspension::{SuspensionManager, SuspensionReceipt};
use clinichub_core::error::AppError;
use clinichub_core::types::pagination::{PageRequest, PageResponse};
use clinichub_database::repositories::user::UserRepository;
use clinichub_entity::user::{SuspensionUnit, User};

use crate::context::RequestContext;

/// Handles administrative operations on identity records.
#[derive(Debug, Clone)]
pub struct AdminUserService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Suspension manager.
    suspensions: Arc<SuspensionManager>,
}

impl AdminUserService {
    /// Creates a new admin user service.
    pub fn new(user_repo: Arc<UserRepository>, suspensions: Arc<SuspensionManager>) -> Self {
        Self {
            user_repo,
            suspensions,
        }
    }

    /// Lists all users with pagination.
    pub async fn list_users(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> Result<PageResponse<User>, AppError> {
        ctx.require_authority("user:manage")?;
        self.user_repo.find_all(&page).await
    }

    /// Gets a single user by ID. Unlike the login path, this reports a
    /// plain 404 on a miss.
    pub async fn get_user(&self, ctx: &RequestContext, user_id: i64) -> Result<User, AppError> {
        ctx.require_authority("user:manage")?;

        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {user_id} not found")))
    }

    /// Suspends a user for the given duration.
    pub async fn suspend_user(
        &self,
        ctx: &RequestContext,
        user_id: i64,
        amount: i64,
        unit: SuspensionUnit,
    ) -> Result<SuspensionReceipt, AppError> {
        ctx.require_authority("user:manage")?;

        let target = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {user_id} not found")))?;
        if target.email == ctx.email {
            return Err(AppError::forbidden("Cannot suspend your own account"));
        }

        let receipt = self.suspensions.suspend(user_id, amount, unit).await?;
        info!(
            admin = %ctx.email,
            target_id = user_id,
            suspension_end = %receipt.suspension_end,
            "User suspended by admin"
        );
        Ok(receipt)
    }

    /// Lifts a user's suspension. Idempotent by effect.
    pub async fn activate_user(&self, ctx: &RequestContext, user_id: i64) -> Result<(), AppError> {
        ctx.require_authority("user:manage")?;

        self.suspensions.activate(user_id).await?;
        info!(
            admin = %ctx.email,
            target_id = user_id,
            "User reactivated by admin"
        );
        Ok(())
    }
}

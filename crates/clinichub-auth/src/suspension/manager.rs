//! Suspend/activate operations on identity records.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use clinichub_core::error::AppError;
use clinichub_database::repositories::user::UserRepository;
use clinichub_entity::user::SuspensionUnit;

/// Sets and clears per-user suspension timestamps.
///
/// Both operations are single-row updates; racing calls on the same user
/// resolve last-write-wins through the database's row-level locking.
#[derive(Debug, Clone)]
pub struct SuspensionManager {
    /// User repository.
    user_repo: Arc<UserRepository>,
}

/// Outcome of a suspend operation, for the admin confirmation response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuspensionReceipt {
    /// The suspended user.
    pub user_id: i64,
    /// When the suspension ends.
    pub suspension_end: DateTime<Utc>,
    /// Seconds until the suspension ends (0 if already elapsed).
    pub remaining_seconds: i64,
}

impl SuspensionManager {
    /// Creates a new suspension manager.
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Suspends a user for `amount` of `unit` from now.
    ///
    /// Any non-negative amount is accepted; an amount of 0 produces a
    /// suspension end already in the past, which the enabled check treats
    /// as not suspended.
    pub async fn suspend(
        &self,
        user_id: i64,
        amount: i64,
        unit: SuspensionUnit,
    ) -> Result<SuspensionReceipt, AppError> {
        if amount < 0 {
            return Err(AppError::validation("Suspension duration must not be negative"));
        }

        let now = Utc::now();
        let suspension_end = now + unit.span(amount);

        let updated = self
            .user_repo
            .set_suspension_end(user_id, Some(suspension_end))
            .await?;
        if !updated {
            return Err(AppError::not_found(format!("User {user_id} not found")));
        }

        info!(
            user_id,
            %suspension_end,
            amount,
            unit = %unit,
            "User suspended"
        );

        Ok(SuspensionReceipt {
            user_id,
            suspension_end,
            remaining_seconds: (suspension_end - now).num_seconds().max(0),
        })
    }

    /// Clears a user's suspension unconditionally.
    ///
    /// Activating an already-active user is a no-op by effect, not an
    /// error.
    pub async fn activate(&self, user_id: i64) -> Result<(), AppError> {
        let updated = self.user_repo.set_suspension_end(user_id, None).await?;
        if !updated {
            return Err(AppError::not_found(format!("User {user_id} not found")));
        }

        info!(user_id, "User reactivated");
        Ok(())
    }
}

//! Suspension sweep: clears elapsed suspension timestamps.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use clinichub_core::error::AppError;
use clinichub_database::repositories::user::UserRepository;

/// Housekeeping task that nulls out elapsed `suspension_end` values.
///
/// The enabled check is always re-derived from the timestamp at login
/// time, so correctness never depends on this sweep running; it only
/// keeps stale state from lingering.
#[derive(Debug, Clone)]
pub struct SuspensionSweeper {
    /// User repository.
    user_repo: Arc<UserRepository>,
}

/// Result of one sweep pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct SweepReport {
    /// Rows whose suspension was cleared.
    pub cleared: usize,
    /// Rows that failed to update (logged and skipped).
    pub failed: usize,
}

impl SuspensionSweeper {
    /// Creates a new sweeper.
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Runs one sweep pass against the given instant.
    ///
    /// Each row is updated individually; a failure on one row is logged
    /// and does not abort the rest of the sweep.
    pub async fn sweep(&self, now: DateTime<Utc>) -> Result<SweepReport, AppError> {
        let expired = self.user_repo.find_suspension_expired(now).await?;

        let mut report = SweepReport::default();
        for user in &expired {
            match self.user_repo.set_suspension_end(user.id, None).await {
                Ok(true) => report.cleared += 1,
                Ok(false) => {
                    // Row vanished between select and update; nothing to clear.
                    warn!(user_id = user.id, "Suspension sweep target disappeared");
                    report.failed += 1;
                }
                Err(e) => {
                    warn!(user_id = user.id, error = %e, "Failed to clear expired suspension");
                    report.failed += 1;
                }
            }
        }

        info!(
            cleared = report.cleared,
            failed = report.failed,
            "Suspension sweep completed"
        );

        Ok(report)
    }
}

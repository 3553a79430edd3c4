//! Cron scheduler for periodic maintenance tasks.
//!
//! The scheduler is constructed, started, and shut down by the server
//! binary; its lifecycle is tied to the process shutdown channel.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::watch;
use tokio_cron_scheduler::{Job as CronJob, JobScheduler};
use tracing::{error, info};

use clinichub_core::config::worker::WorkerConfig;
use clinichub_core::error::AppError;

use crate::jobs::suspension::SuspensionSweeper;

/// Cron-based scheduler for ClinicHub background tasks.
pub struct SweepScheduler {
    /// The underlying job scheduler.
    scheduler: JobScheduler,
    /// Suspension sweeper task.
    sweeper: Arc<SuspensionSweeper>,
    /// Worker configuration.
    config: WorkerConfig,
}

impl std::fmt::Debug for SweepScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SweepScheduler")
            .field("config", &self.config)
            .finish()
    }
}

impl SweepScheduler {
    /// Creates a new scheduler.
    pub async fn new(
        sweeper: Arc<SuspensionSweeper>,
        config: WorkerConfig,
    ) -> Result<Self, AppError> {
        let scheduler = JobScheduler::new()
            .await
            .map_err(|e| AppError::internal(format!("Failed to create scheduler: {e}")))?;

        Ok(Self {
            scheduler,
            sweeper,
            config,
        })
    }

    /// Registers all scheduled tasks.
    pub async fn register_tasks(&self) -> Result<(), AppError> {
        self.register_suspension_sweep().await?;
        info!("All scheduled tasks registered");
        Ok(())
    }

    /// Starts the scheduler.
    pub async fn start(&self) -> Result<(), AppError> {
        self.scheduler
            .start()
            .await
            .map_err(|e| AppError::internal(format!("Failed to start scheduler: {e}")))?;

        info!("Cron scheduler started");
        Ok(())
    }

    /// Shuts the scheduler down.
    pub async fn shutdown(&mut self) -> Result<(), AppError> {
        self.scheduler
            .shutdown()
            .await
            .map_err(|e| AppError::internal(format!("Failed to shutdown scheduler: {e}")))?;

        info!("Cron scheduler shut down");
        Ok(())
    }

    /// Runs until the shutdown channel fires, then stops the scheduler.
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) {
        loop {
            if shutdown.changed().await.is_err() || *shutdown.borrow() {
                break;
            }
        }
        if let Err(e) = self.shutdown().await {
            error!("Scheduler shutdown failed: {e}");
        }
    }

    /// Suspension sweep — daily by default (`WorkerConfig`).
    async fn register_suspension_sweep(&self) -> Result<(), AppError> {
        let sweeper = Arc::clone(&self.sweeper);
        let job = CronJob::new_async(
            self.config.suspension_sweep_cron.as_str(),
            move |_uuid, _lock| {
                let sweeper = Arc::clone(&sweeper);
                Box::pin(async move {
                    if let Err(e) = sweeper.sweep(Utc::now()).await {
                        error!("Suspension sweep failed: {e}");
                    }
                })
            },
        )
        .map_err(|e| {
            AppError::internal(format!("Failed to create suspension_sweep schedule: {e}"))
        })?;

        self.scheduler.add(job).await.map_err(|e| {
            AppError::internal(format!("Failed to add suspension_sweep schedule: {e}"))
        })?;

        info!(
            cron = %self.config.suspension_sweep_cron,
            "Registered: suspension_sweep"
        );
        Ok(())
    }
}

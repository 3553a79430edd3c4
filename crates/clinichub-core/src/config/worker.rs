//! Background worker configuration.

use serde::{Deserialize, Serialize};

/// Scheduled background task configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Whether scheduled tasks run at all.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Cron expression (seconds-resolution) for the suspension sweep.
    #[serde(default = "default_sweep_cron")]
    pub suspension_sweep_cron: String,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            suspension_sweep_cron: default_sweep_cron(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_sweep_cron() -> String {
    // Daily at 04:00.
    "0 0 4 * * *".to_string()
}

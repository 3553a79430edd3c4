//! Diagnosis entries attached to a medical record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A coded diagnosis attached to a medical record.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Diagnosis {
    /// Unique diagnosis identifier.
    pub id: i64,
    /// Owning medical record.
    pub record_id: i64,
    /// Diagnosis code (ICD-style).
    pub code: String,
    /// Human-readable description.
    pub description: String,
    /// When the diagnosis was made.
    pub diagnosed_at: DateTime<Utc>,
}

/// Data required to attach a diagnosis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDiagnosis {
    /// Diagnosis code.
    pub code: String,
    /// Human-readable description.
    pub description: String,
}

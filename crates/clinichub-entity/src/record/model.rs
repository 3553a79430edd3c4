//! Medical record entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A medical record opened for a patient by a professional.
///
/// Diagnoses and follow-up entries hang off the record and are loaded
/// separately by the record repository.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MedicalRecord {
    /// Unique record identifier.
    pub id: i64,
    /// Patient the record belongs to.
    pub patient_id: i64,
    /// Professional who opened the record.
    pub professional_id: i64,
    /// When the record was opened.
    pub opened_at: DateTime<Utc>,
    /// Free-form clinical notes.
    pub notes: Option<String>,
}

/// Data required to open a medical record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRecord {
    /// Patient the record belongs to.
    pub patient_id: i64,
    /// Professional opening the record.
    pub professional_id: i64,
    /// Free-form clinical notes.
    pub notes: Option<String>,
}

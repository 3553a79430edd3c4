//! Clinical report entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A written clinical report issued against a medical record.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ClinicalReport {
    /// Unique report identifier.
    pub id: i64,
    /// Medical record the report is issued against.
    pub record_id: i64,
    /// Professional who issued the report.
    pub professional_id: i64,
    /// Report title.
    pub title: String,
    /// Report body text.
    pub body: String,
    /// When the report was issued.
    pub issued_at: DateTime<Utc>,
}

/// Data required to issue a clinical report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReport {
    /// Medical record the report is issued against.
    pub record_id: i64,
    /// Professional issuing the report.
    pub professional_id: i64,
    /// Report title.
    pub title: String,
    /// Report body text.
    pub body: String,
}

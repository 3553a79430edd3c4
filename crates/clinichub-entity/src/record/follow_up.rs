//! Follow-up entries attached to a medical record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A dated follow-up note appended to a medical record.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FollowUpEntry {
    /// Unique entry identifier.
    pub id: i64,
    /// Owning medical record.
    pub record_id: i64,
    /// Professional who wrote the entry.
    pub professional_id: i64,
    /// Note body.
    pub note: String,
    /// When the entry was written.
    pub created_at: DateTime<Utc>,
}

/// Data required to append a follow-up entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFollowUp {
    /// Professional writing the entry.
    pub professional_id: i64,
    /// Note body.
    pub note: String,
}

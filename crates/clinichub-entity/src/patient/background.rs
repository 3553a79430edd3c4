//! Medical background entity (one per patient).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Long-lived medical background for a patient, maintained as a single
/// row with upsert semantics.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MedicalBackground {
    /// Unique background identifier.
    pub id: i64,
    /// Owning patient (unique).
    pub patient_id: i64,
    /// Known allergies.
    pub allergies: Option<String>,
    /// Current medications.
    pub medications: Option<String>,
    /// Relevant family history.
    pub family_history: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// When the background was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Upsert payload for a patient's medical background.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertBackground {
    /// Known allergies.
    pub allergies: Option<String>,
    /// Current medications.
    pub medications: Option<String>,
    /// Relevant family history.
    pub family_history: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
}

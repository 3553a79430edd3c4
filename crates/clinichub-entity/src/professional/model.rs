//! Professional entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A clinic professional (physician, psychologist, therapist, ...).
///
/// Linked one-to-one with an identity record holding the `PROFESSIONAL`
/// role.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Professional {
    /// Unique professional identifier.
    pub id: i64,
    /// Owning identity record.
    pub user_id: i64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Professional license number (unique).
    pub license_number: String,
    /// Specialty, e.g. `"pediatrics"`.
    pub specialty: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// When the professional was registered.
    pub created_at: DateTime<Utc>,
    /// When the professional was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Professional {
    /// Full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Data required to create a professional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProfessional {
    /// Owning identity record.
    pub user_id: i64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Professional license number (unique).
    pub license_number: String,
    /// Specialty.
    pub specialty: String,
    /// Contact phone number.
    pub phone: Option<String>,
}

/// Partial update for a professional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfessional {
    /// New given name.
    pub first_name: Option<String>,
    /// New family name.
    pub last_name: Option<String>,
    /// New specialty.
    pub specialty: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
}

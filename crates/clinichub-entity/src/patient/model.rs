//! Patient entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A patient registered with the clinic.
///
/// Linked one-to-one with an identity record holding the `PATIENT` role.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Patient {
    /// Unique patient identifier.
    pub id: i64,
    /// Owning identity record.
    pub user_id: i64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// National document number (unique).
    pub document_number: String,
    /// Date of birth.
    pub birth_date: NaiveDate,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Postal address.
    pub address: Option<String>,
    /// School the patient attends, if any.
    pub school_id: Option<i64>,
    /// When the patient was registered.
    pub created_at: DateTime<Utc>,
    /// When the patient was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Patient {
    /// Full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Data required to create a patient (identity record created alongside).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePatient {
    /// Owning identity record.
    pub user_id: i64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// National document number (unique).
    pub document_number: String,
    /// Date of birth.
    pub birth_date: NaiveDate,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Postal address.
    pub address: Option<String>,
    /// School the patient attends, if any.
    pub school_id: Option<i64>,
}

/// Partial update for a patient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePatient {
    /// New given name.
    pub first_name: Option<String>,
    /// New family name.
    pub last_name: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
    /// New address.
    pub address: Option<String>,
    /// New school enrollment (explicit `null` clears it).
    pub school_id: Option<Option<i64>>,
}

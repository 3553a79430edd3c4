//! Request DTOs with validation.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use clinichub_entity::user::SuspensionUnit;

/// Distinguishes an absent field (`None`) from an explicit `null`
/// (`Some(None)`) in PATCH-style requests.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login email.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Patient self-registration request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterPatientRequest {
    /// Login email.
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    /// Initial password.
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    /// Given name.
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    /// Family name.
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    /// National document number.
    #[validate(length(min = 1, max = 50))]
    pub document_number: String,
    /// Date of birth.
    pub birth_date: NaiveDate,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Postal address.
    pub address: Option<String>,
    /// School enrollment.
    pub school_id: Option<i64>,
}

/// Professional registration request (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterProfessionalRequest {
    /// Login email.
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    /// Initial password.
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    /// Given name.
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    /// Family name.
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    /// License number.
    #[validate(length(min = 1, max = 50))]
    pub license_number: String,
    /// Specialty.
    #[validate(length(min = 1, max = 100))]
    pub specialty: String,
    /// Contact phone number.
    pub phone: Option<String>,
}

/// Receptionist registration request (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterReceptionistRequest {
    /// Login email.
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    /// Initial password.
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    /// Given name.
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    /// Family name.
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    /// Contact phone number.
    pub phone: Option<String>,
}

/// Patient update request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePatientRequest {
    /// New given name.
    pub first_name: Option<String>,
    /// New family name.
    pub last_name: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
    /// New address.
    pub address: Option<String>,
    /// New school enrollment (explicit `null` clears it).
    #[serde(default, deserialize_with = "double_option")]
    pub school_id: Option<Option<i64>>,
}

/// Professional update request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfessionalRequest {
    /// New given name.
    pub first_name: Option<String>,
    /// New family name.
    pub last_name: Option<String>,
    /// New specialty.
    pub specialty: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
}

/// Receptionist update request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateReceptionistRequest {
    /// New given name.
    pub first_name: Option<String>,
    /// New family name.
    pub last_name: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
}

/// School creation request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSchoolRequest {
    /// School name.
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    /// Postal address.
    pub address: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
}

/// School update request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSchoolRequest {
    /// New name.
    pub name: Option<String>,
    /// New address.
    pub address: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
}

/// Open-record request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenRecordRequest {
    /// Patient the record is for.
    pub patient_id: i64,
    /// Professional opening the record.
    pub professional_id: i64,
    /// Free-form clinical notes.
    pub notes: Option<String>,
}

/// Record-notes update request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRecordNotesRequest {
    /// New notes (explicit `null` clears them).
    pub notes: Option<String>,
}

/// Diagnosis creation request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddDiagnosisRequest {
    /// Diagnosis code.
    #[validate(length(min = 1, max = 20))]
    pub code: String,
    /// Description.
    #[validate(length(min = 1))]
    pub description: String,
}

/// Follow-up creation request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddFollowUpRequest {
    /// Professional writing the entry.
    pub professional_id: i64,
    /// Note body.
    #[validate(length(min = 1))]
    pub note: String,
}

/// Medical-background upsert request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertBackgroundRequest {
    /// Known allergies.
    pub allergies: Option<String>,
    /// Current medications.
    pub medications: Option<String>,
    /// Relevant family history.
    pub family_history: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
}

/// Clinical-report creation request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateReportRequest {
    /// Medical record the report is issued against.
    pub record_id: i64,
    /// Issuing professional.
    pub professional_id: i64,
    /// Report title.
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    /// Report body text.
    #[validate(length(min = 1))]
    pub body: String,
}

/// Suspend request (admin).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuspendRequest {
    /// Duration amount in the given unit.
    pub duration: i64,
    /// Duration unit.
    pub unit: SuspensionUnit,
}

/// Clinical-history filter query parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordHistoryQuery {
    /// Restrict to a single patient.
    pub patient_id: Option<i64>,
    /// Restrict to a single professional.
    pub professional_id: Option<i64>,
    /// Records opened at or after this instant.
    pub opened_from: Option<DateTime<Utc>>,
    /// Records opened at or before this instant.
    pub opened_to: Option<DateTime<Utc>>,
}

/// Patient search query parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Name or document fragment to search for.
    #[serde(default)]
    pub q: String,
}

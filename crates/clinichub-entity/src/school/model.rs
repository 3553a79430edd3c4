//! School entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A school that patients may be enrolled in.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct School {
    /// Unique school identifier.
    pub id: i64,
    /// School name.
    pub name: String,
    /// Postal address.
    pub address: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// When the school was registered.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a school.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSchool {
    /// School name.
    pub name: String,
    /// Postal address.
    pub address: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
}

/// Partial update for a school.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSchool {
    /// New name.
    pub name: Option<String>,
    /// New address.
    pub address: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
}

//! Receptionist entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A front-desk receptionist.
///
/// Linked one-to-one with an identity record holding the `RECEPTIONIST`
/// role.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Receptionist {
    /// Unique receptionist identifier.
    pub id: i64,
    /// Owning identity record.
    pub user_id: i64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// When the receptionist was registered.
    pub created_at: DateTime<Utc>,
    /// When the receptionist was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a receptionist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReceptionist {
    /// Owning identity record.
    pub user_id: i64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact phone number.
    pub phone: Option<String>,
}

/// Partial update for a receptionist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateReceptionist {
    /// New given name.
    pub first_name: Option<String>,
    /// New family name.
    pub last_name: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
}

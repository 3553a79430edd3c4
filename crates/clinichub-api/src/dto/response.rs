//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use clinichub_entity::user::User;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Login response. Flat shape: the cookie carries the token as well, but
/// the body repeats it for non-browser clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The authenticated user's ID.
    pub id: i64,
    /// The authenticated user's email.
    pub email: String,
    /// Human-readable confirmation.
    pub message: String,
    /// The issued token.
    pub token: String,
    /// Always `true` on this path; failures use the error body.
    pub success: bool,
}

/// Current-principal response for `GET /api/auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    /// The principal's email.
    pub email: String,
    /// Authorities granted at token issuance, sorted for stable output.
    pub authorities: Vec<String>,
}

/// User summary for admin responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: i64,
    /// Email.
    pub email: String,
    /// Suspension end, if suspended.
    pub suspension_end: Option<DateTime<Utc>>,
    /// Whether the account may log in right now.
    pub enabled: bool,
    /// Registration date.
    pub registered_at: DateTime<Utc>,
    /// Last login.
    pub last_login_at: Option<DateTime<Utc>>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let enabled = user.is_enabled();
        Self {
            id: user.id,
            email: user.email,
            suspension_end: user.suspension_end,
            enabled,
            registered_at: user.registered_at,
            last_login_at: user.last_login_at,
        }
    }
}

/// Suspension confirmation for the admin endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuspensionResponse {
    /// The suspended user.
    pub user_id: i64,
    /// When the suspension ends.
    pub suspension_end: DateTime<Utc>,
    /// Seconds until the suspension ends.
    pub remaining_seconds: i64,
    /// Human-readable confirmation.
    pub message: String,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

//! User identity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered identity record in the ClinicHub system.
///
/// Every patient, professional, and receptionist owns exactly one `User`
/// row; role assignments live in the `user_roles` join table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: i64,
    /// Login email, unique and matched exactly as stored.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Instant after which the account is enabled again. `None` means the
    /// account was never suspended (or the suspension was lifted).
    pub suspension_end: Option<DateTime<Utc>>,
    /// When the account was registered.
    pub registered_at: DateTime<Utc>,
    /// Last successful login time.
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    /// Whether the account may log in right now.
    ///
    /// Derived from the suspension timestamp alone; the suspension sweeper
    /// only clears stale rows and is never consulted here.
    pub fn is_enabled(&self) -> bool {
        self.is_enabled_at(Utc::now())
    }

    /// Enabled check against an explicit instant (testable form).
    pub fn is_enabled_at(&self, now: DateTime<Utc>) -> bool {
        match self.suspension_end {
            None => true,
            Some(end) => end < now,
        }
    }
}

/// Data required to create a new identity record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Login email (unique).
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn user(suspension_end: Option<DateTime<Utc>>) -> User {
        User {
            id: 1,
            email: "someone@example.com".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            suspension_end,
            registered_at: Utc::now(),
            last_login_at: None,
        }
    }

    #[test]
    fn test_enabled_without_suspension() {
        assert!(user(None).is_enabled());
    }

    #[test]
    fn test_disabled_while_suspension_pending() {
        let now = Utc::now();
        let u = user(Some(now + Duration::hours(2)));
        assert!(!u.is_enabled_at(now));
    }

    #[test]
    fn test_enabled_after_suspension_elapsed() {
        let now = Utc::now();
        let u = user(Some(now - Duration::seconds(1)));
        assert!(u.is_enabled_at(now));
    }

    #[test]
    fn test_suspension_end_exactly_now_is_still_disabled() {
        // Strictly-before comparison: an end equal to "now" has not elapsed.
        let now = Utc::now();
        let u = user(Some(now));
        assert!(!u.is_enabled_at(now));
    }
}

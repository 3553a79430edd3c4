//! Request context carrying the authenticated principal.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use clinichub_core::error::AppError;

/// Role-derived authority string for administrators.
pub const AUTHORITY_ADMIN: &str = "ROLE_ADMIN";

/// Context for the current authenticated request.
///
/// Built by the token-validation middleware from the claims alone (the
/// token is self-contained, so no lookup happens per request) and passed
/// into service methods so that every operation knows *who* is acting.
/// Discarded at the end of the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's email (token subject).
    pub email: String,
    /// Deduplicated authority strings granted at token issuance.
    pub authorities: HashSet<String>,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(email: String, authorities: HashSet<String>) -> Self {
        Self {
            email,
            authorities,
            request_time: Utc::now(),
        }
    }

    /// Whether the principal holds the given authority.
    pub fn has_authority(&self, authority: &str) -> bool {
        self.authorities.contains(authority)
    }

    /// Whether the principal holds any of the given authorities.
    pub fn has_any_authority(&self, authorities: &[&str]) -> bool {
        authorities.iter().any(|a| self.authorities.contains(*a))
    }

    /// Whether the principal is an administrator.
    pub fn is_admin(&self) -> bool {
        self.has_authority(AUTHORITY_ADMIN)
    }

    /// Requires the given authority, failing with a generic forbidden
    /// error that does not reveal which authority was required.
    pub fn require_authority(&self, authority: &str) -> Result<(), AppError> {
        if self.has_authority(authority) {
            Ok(())
        } else {
            Err(AppError::forbidden("Insufficient privileges"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(authorities: &[&str]) -> RequestContext {
        RequestContext::new(
            "staff@example.com".to_string(),
            authorities.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[test]
    fn test_require_authority() {
        let ctx = ctx(&["ROLE_RECEPTIONIST", "patient:write"]);
        assert!(ctx.require_authority("patient:write").is_ok());

        let err = ctx.require_authority("user:manage").unwrap_err();
        // The message never names the missing authority.
        assert_eq!(err.message, "Insufficient privileges");
    }

    #[test]
    fn test_is_admin() {
        assert!(ctx(&["ROLE_ADMIN"]).is_admin());
        assert!(!ctx(&["ROLE_PATIENT"]).is_admin());
    }

    #[test]
    fn test_has_any_authority() {
        let ctx = ctx(&["ROLE_PROFESSIONAL", "record:read"]);
        assert!(ctx.has_any_authority(&["ROLE_ADMIN", "ROLE_PROFESSIONAL"]));
        assert!(!ctx.has_any_authority(&["ROLE_ADMIN", "ROLE_RECEPTIONIST"]));
    }
}

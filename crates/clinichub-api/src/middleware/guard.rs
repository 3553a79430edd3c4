//! Declarative route guard.
//!
//! Authorization is table-driven: each rule maps a path prefix to the
//! authorities allowed through it. The longest matching prefix wins; an
//! unlisted path is public; an empty authority list means "any
//! authenticated principal".

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use clinichub_core::error::AppError;
use clinichub_service::context::RequestContext;

use crate::error::ApiError;

/// A single authorization rule.
#[derive(Debug, Clone, Copy)]
pub struct RouteRule {
    /// Path prefix the rule applies to.
    pub prefix: &'static str,
    /// Authorities allowed through; empty means any authenticated user.
    pub required: &'static [&'static str],
}

/// Route authorization table. Order does not matter; the longest
/// matching prefix is selected.
pub const ROUTE_RULES: &[RouteRule] = &[
    RouteRule {
        prefix: "/api/admin",
        required: &["ROLE_ADMIN"],
    },
    RouteRule {
        prefix: "/api/patients",
        required: &["ROLE_ADMIN", "ROLE_RECEPTIONIST", "ROLE_PROFESSIONAL"],
    },
    RouteRule {
        prefix: "/api/professionals",
        required: &["ROLE_ADMIN", "ROLE_RECEPTIONIST"],
    },
    RouteRule {
        prefix: "/api/receptionists",
        required: &["ROLE_ADMIN"],
    },
    RouteRule {
        prefix: "/api/schools",
        required: &["ROLE_ADMIN", "ROLE_RECEPTIONIST"],
    },
    RouteRule {
        prefix: "/api/records",
        required: &["ROLE_ADMIN", "ROLE_PROFESSIONAL"],
    },
    RouteRule {
        prefix: "/api/reports",
        required: &["ROLE_ADMIN", "ROLE_PROFESSIONAL"],
    },
    RouteRule {
        prefix: "/api/auth/me",
        required: &[],
    },
];

/// Finds the rule with the longest prefix matching `path`.
pub fn rule_for(path: &str) -> Option<&'static RouteRule> {
    ROUTE_RULES
        .iter()
        .filter(|rule| path.starts_with(rule.prefix))
        .max_by_key(|rule| rule.prefix.len())
}

/// Enforces the route table against the bound principal.
pub async fn authorize(request: Request, next: Next) -> Response {
    let Some(rule) = rule_for(request.uri().path()) else {
        return next.run(request).await;
    };

    let Some(ctx) = request.extensions().get::<RequestContext>() else {
        return ApiError::new(AppError::authentication("Authentication required"))
            .into_response();
    };

    if !rule.required.is_empty() && !ctx.has_any_authority(rule.required) {
        // Generic message; never reveal which authority was required.
        return ApiError::new(AppError::forbidden("Insufficient privileges")).into_response();
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_prefix_wins() {
        // /api/auth/me is a longer match than any /api rule would be.
        let rule = rule_for("/api/auth/me").unwrap();
        assert_eq!(rule.prefix, "/api/auth/me");
        assert!(rule.required.is_empty());
    }

    #[test]
    fn test_admin_prefix() {
        let rule = rule_for("/api/admin/users/5/suspend").unwrap();
        assert_eq!(rule.prefix, "/api/admin");
        assert_eq!(rule.required, &["ROLE_ADMIN"]);
    }

    #[test]
    fn test_unlisted_path_is_public() {
        assert!(rule_for("/api/auth/login").is_none());
        assert!(rule_for("/api/health").is_none());
    }

    #[test]
    fn test_patients_allow_staff_roles() {
        let rule = rule_for("/api/patients/3/background").unwrap();
        assert!(rule.required.contains(&"ROLE_RECEPTIONIST"));
        assert!(rule.required.contains(&"ROLE_PROFESSIONAL"));
        assert!(!rule.required.contains(&"ROLE_PATIENT"));
    }
}

//! Authority derivation from granted roles.

use std::collections::HashSet;

use clinichub_entity::user::GrantedRole;

/// Prefix applied to role names when flattened into authorities.
pub const ROLE_PREFIX: &str = "ROLE_";

/// Flattens a user's granted roles into an authority set.
///
/// Each role contributes `ROLE_<name>` plus every permission name it
/// holds. Overlapping permissions across roles collapse because the
/// result is a set; no ordering is guaranteed.
pub fn resolve_authorities(roles: &[GrantedRole]) -> HashSet<String> {
    let mut authorities = HashSet::new();
    for role in roles {
        authorities.insert(format!("{ROLE_PREFIX}{}", role.name));
        for permission in &role.permissions {
            authorities.insert(permission.clone());
        }
    }
    authorities
}

#[cfg(test)]
mod tests {
    use super::*;

    fn role(name: &str, permissions: &[&str]) -> GrantedRole {
        GrantedRole {
            name: name.to_string(),
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn test_single_role_flattening() {
        let authorities = resolve_authorities(&[role("ADMIN", &["user:manage", "patient:read"])]);
        assert_eq!(authorities.len(), 3);
        assert!(authorities.contains("ROLE_ADMIN"));
        assert!(authorities.contains("user:manage"));
        assert!(authorities.contains("patient:read"));
    }

    #[test]
    fn test_overlapping_permissions_dedupe() {
        let authorities = resolve_authorities(&[
            role("PROFESSIONAL", &["patient:read", "record:read"]),
            role("RECEPTIONIST", &["patient:read", "patient:write"]),
        ]);
        // ROLE_PROFESSIONAL, ROLE_RECEPTIONIST, patient:read, record:read, patient:write
        assert_eq!(authorities.len(), 5);
    }

    #[test]
    fn test_no_roles_yields_empty_set() {
        assert!(resolve_authorities(&[]).is_empty());
    }

    #[test]
    fn test_role_without_permissions() {
        let authorities = resolve_authorities(&[role("PATIENT", &[])]);
        assert_eq!(authorities.len(), 1);
        assert!(authorities.contains("ROLE_PATIENT"));
    }
}

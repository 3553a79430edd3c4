//! Role and permission reference entities.
//!
//! Roles and permissions are seeded by migration and never mutated at
//! runtime. A user's effective authorities are derived from the roles
//! granted through the `user_roles` join table.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Well-known role names seeded by migration.
pub const ROLE_ADMIN: &str = "ADMIN";
/// Clinic professional role name.
pub const ROLE_PROFESSIONAL: &str = "PROFESSIONAL";
/// Front-desk receptionist role name.
pub const ROLE_RECEPTIONIST: &str = "RECEPTIONIST";
/// Patient role name.
pub const ROLE_PATIENT: &str = "PATIENT";

/// A named permission group.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Role {
    /// Unique role identifier.
    pub id: i64,
    /// Role name, e.g. `ADMIN`.
    pub name: String,
}

/// A fine-grained authority string, e.g. `record:write`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Permission {
    /// Unique permission identifier.
    pub id: i64,
    /// Permission name.
    pub name: String,
}

/// A role granted to a user, flattened with its permission names.
///
/// This is the unit the authority resolver consumes; it is assembled by
/// the user repository from the role/permission join tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrantedRole {
    /// Role name.
    pub name: String,
    /// Names of the permissions held by this role.
    pub permissions: Vec<String>,
}

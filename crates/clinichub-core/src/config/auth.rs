//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Token lifetime in seconds. Also used as the cookie max-age.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_seconds: u64,
    /// Name of the cookie carrying the token.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Whether the cookie is marked `Secure` (HTTPS-only).
    #[serde(default = "default_true")]
    pub cookie_secure: bool,
    /// Cookie `SameSite` policy: `"strict"`, `"lax"`, or `"none"`.
    /// Deployment parameter, not a fixed contract.
    #[serde(default = "default_same_site")]
    pub cookie_same_site: String,
    /// Minimum password length for new accounts.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Email of the bootstrap admin account ensured at startup.
    #[serde(default = "default_admin_email")]
    pub bootstrap_admin_email: String,
    /// Password of the bootstrap admin account. Change in production.
    #[serde(default = "default_admin_password")]
    pub bootstrap_admin_password: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_ttl_seconds: default_token_ttl(),
            cookie_name: default_cookie_name(),
            cookie_secure: default_true(),
            cookie_same_site: default_same_site(),
            password_min_length: default_password_min(),
            bootstrap_admin_email: default_admin_email(),
            bootstrap_admin_password: default_admin_password(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_token_ttl() -> u64 {
    3600
}

fn default_cookie_name() -> String {
    "jwt_token".to_string()
}

fn default_true() -> bool {
    true
}

fn default_same_site() -> String {
    "lax".to_string()
}

fn default_password_min() -> usize {
    8
}

fn default_admin_email() -> String {
    "admin@example.com".to_string()
}

fn default_admin_password() -> String {
    "admin123".to_string()
}

//! Token issuance with configurable signing and TTL.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use clinichub_core::config::auth::AuthConfig;
use clinichub_core::error::AppError;

use super::claims::Claims;

/// Creates signed tokens for authenticated principals.
///
/// The caller is responsible for credential verification; the issuer only
/// encodes what it is given.
#[derive(Clone)]
pub struct TokenIssuer {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Token lifetime in seconds.
    ttl_seconds: u64,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}

/// Result of a successful token issuance.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct IssuedToken {
    /// The signed token string.
    pub token: String,
    /// When the token expires.
    pub expires_at: DateTime<Utc>,
}

impl TokenIssuer {
    /// Creates a new issuer from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl_seconds: config.token_ttl_seconds,
        }
    }

    /// The configured token lifetime in seconds (also the cookie max-age).
    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }

    /// Issues a signed token for the given principal.
    pub fn issue(&self, email: &str, authorities: &HashSet<String>) -> Result<IssuedToken, AppError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::seconds(self.ttl_seconds as i64);

        let mut joined: Vec<&str> = authorities.iter().map(String::as_str).collect();
        joined.sort_unstable();

        let claims = Claims {
            sub: email.to_string(),
            authorities: joined.join(","),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))?;

        Ok(IssuedToken { token, expires_at })
    }
}

//! Token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use clinichub_core::config::auth::AuthConfig;
use clinichub_core::error::AppError;

use super::claims::Claims;

/// Validates token signatures and expiry.
#[derive(Clone)]
pub struct TokenValidator {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for TokenValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenValidator")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a token string.
    ///
    /// Checks:
    /// 1. Signature validity
    /// 2. Expiration
    pub fn validate(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::authentication("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        AppError::authentication("Invalid token format")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::authentication("Invalid token signature")
                    }
                    _ => AppError::authentication(format!("Token validation failed: {e}")),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::TokenIssuer;
    use clinichub_core::error::ErrorKind;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use std::collections::HashSet;

    fn config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "unit-test-secret".to_string(),
            token_ttl_seconds: 3600,
            ..AuthConfig::default()
        }
    }

    fn authority_set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_round_trip_preserves_authority_set() {
        let cfg = config();
        let issuer = TokenIssuer::new(&cfg);
        let validator = TokenValidator::new(&cfg);

        let authorities = authority_set(&["ROLE_ADMIN", "user:manage", "patient:read"]);
        let issued = issuer.issue("admin@example.com", &authorities).unwrap();

        let claims = validator.validate(&issued.token).unwrap();
        assert_eq!(claims.sub, "admin@example.com");
        assert_eq!(claims.authority_set(), authorities);
    }

    #[test]
    fn test_expired_token_rejected() {
        let cfg = config();
        let validator = TokenValidator::new(&cfg);

        // Hand-build a token whose exp is well past the leeway window.
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: "late@example.com".to_string(),
            authorities: "ROLE_PATIENT".to_string(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let key = EncodingKey::from_secret(cfg.jwt_secret.as_bytes());
        let token = encode(&Header::default(), &claims, &key).unwrap();

        let err = validator.validate(&token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
        assert!(err.message.contains("expired"));
    }

    #[test]
    fn test_tampered_signature_rejected() {
        let cfg = config();
        let issuer = TokenIssuer::new(&cfg);
        let validator = TokenValidator::new(&cfg);

        let issued = issuer
            .issue("victim@example.com", &authority_set(&["ROLE_PATIENT"]))
            .unwrap();

        // Flip one character in the signature segment.
        let mut parts: Vec<String> = issued.token.split('.').map(str::to_string).collect();
        assert_eq!(parts.len(), 3);
        let sig = &mut parts[2];
        let flipped = if sig.ends_with('A') { "B" } else { "A" };
        sig.replace_range(sig.len() - 1.., flipped);
        let tampered = parts.join(".");

        let err = validator.validate(&tampered).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issuer = TokenIssuer::new(&config());
        let other = AuthConfig {
            jwt_secret: "a-different-secret".to_string(),
            ..AuthConfig::default()
        };
        let validator = TokenValidator::new(&other);

        let issued = issuer
            .issue("victim@example.com", &authority_set(&["ROLE_PATIENT"]))
            .unwrap();
        assert!(validator.validate(&issued.token).is_err());
    }

    #[test]
    fn test_garbage_token_rejected() {
        let validator = TokenValidator::new(&config());
        assert!(validator.validate("not.a.jwt").is_err());
        assert!(validator.validate("").is_err());
    }
}

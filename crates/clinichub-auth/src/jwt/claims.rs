//! JWT claims structure.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Claims payload embedded in every token.
///
/// The token is stateless: everything the request pipeline needs to
/// rebuild the principal lives in the claim set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the user's email.
    pub sub: String,
    /// Comma-joined authority strings granted at issuance time.
    pub authorities: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Splits the authorities claim back into a set.
    ///
    /// Duplicates collapse and ordering is irrelevant, matching how the
    /// set was flattened at issuance.
    pub fn authority_set(&self) -> HashSet<String> {
        self.authorities
            .split(',')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authority_set_splits_and_dedupes() {
        let claims = Claims {
            sub: "a@b.c".to_string(),
            authorities: "ROLE_ADMIN,user:manage,ROLE_ADMIN".to_string(),
            iat: 0,
            exp: 0,
        };
        let set = claims.authority_set();
        assert_eq!(set.len(), 2);
        assert!(set.contains("ROLE_ADMIN"));
        assert!(set.contains("user:manage"));
    }

    #[test]
    fn test_empty_authorities_claim() {
        let claims = Claims {
            sub: "a@b.c".to_string(),
            authorities: String::new(),
            iat: 0,
            exp: 0,
        };
        assert!(claims.authority_set().is_empty());
    }
}

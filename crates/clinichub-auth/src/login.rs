//! Credential verification and token issuance flow.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{info, warn};

use clinichub_core::error::AppError;
use clinichub_database::repositories::user::UserRepository;
use clinichub_entity::user::User;

use crate::authorities::resolve_authorities;
use crate::jwt::encoder::{IssuedToken, TokenIssuer};
use crate::password::PasswordHasher;

/// Generic message for both unknown-email and wrong-password failures.
/// Never reveals which of the two was wrong.
const BAD_CREDENTIALS: &str = "Invalid email or password";

/// Verifies submitted credentials and issues tokens.
#[derive(Debug, Clone)]
pub struct LoginService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Token issuer.
    issuer: Arc<TokenIssuer>,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// The authenticated user.
    pub user: User,
    /// Authority set derived at login time.
    pub authorities: HashSet<String>,
    /// The issued token.
    pub issued: IssuedToken,
}

impl LoginService {
    /// Creates a new login service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        issuer: Arc<TokenIssuer>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            issuer,
        }
    }

    /// Verifies `email`/`password` and issues a token.
    ///
    /// Failure order: lookup miss and password mismatch both collapse into
    /// the same generic 401; a suspension surfaces as 403 with the
    /// suspension-end timestamp.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AppError> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::authentication(BAD_CREDENTIALS))?;

        if !user.is_enabled() {
            let end = user
                .suspension_end
                .map(|t| t.to_rfc3339())
                .unwrap_or_default();
            return Err(AppError::disabled(format!(
                "Account is suspended until {end}"
            )));
        }

        if !self.hasher.verify_password(password, &user.password_hash)? {
            return Err(AppError::authentication(BAD_CREDENTIALS));
        }

        let roles = self.user_repo.granted_roles(user.id).await?;
        let authorities = resolve_authorities(&roles);

        let issued = self.issuer.issue(&user.email, &authorities)?;

        if let Err(e) = self.user_repo.update_last_login(user.id).await {
            // A failed timestamp touch must not fail the login.
            warn!(user_id = user.id, error = %e, "Failed to update last login");
        }

        info!(user_id = user.id, "User logged in");

        Ok(LoginOutcome {
            user,
            authorities,
            issued,
        })
    }
}

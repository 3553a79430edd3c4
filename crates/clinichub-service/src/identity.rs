//! Identity creation shared by the registration flows.

use std::sync::Arc;

use tracing::info;

use clinichub_auth::password::{PasswordHasher, PasswordValidator};
use clinichub_core::error::AppError;
use clinichub_database::repositories::user::UserRepository;
use clinichub_entity::user::model::CreateUser;
use clinichub_entity::user::User;

/// Creates identity records with a hashed password and a role grant.
///
/// Every sign-up flow (patient, professional, receptionist) funnels
/// through here so the password policy and email-uniqueness handling stay
/// in one place.
#[derive(Debug, Clone)]
pub struct IdentityService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password policy validator.
    validator: Arc<PasswordValidator>,
}

impl IdentityService {
    /// Creates a new identity service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            validator,
        }
    }

    /// Creates an identity record with the given role attached.
    pub async fn create_identity(
        &self,
        email: &str,
        password: &str,
        role_name: &str,
    ) -> Result<User, AppError> {
        if email.trim().is_empty() || !email.contains('@') {
            return Err(AppError::validation("A valid email address is required"));
        }

        if self.user_repo.find_by_email(email).await?.is_some() {
            return Err(AppError::conflict("Email already in use"));
        }

        self.validator.validate(password)?;
        let password_hash = self.hasher.hash_password(password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                email: email.to_string(),
                password_hash,
            })
            .await?;

        self.user_repo.assign_role(user.id, role_name).await?;

        info!(user_id = user.id, role = role_name, "Identity created");

        Ok(user)
    }
}

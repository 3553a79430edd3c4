//! User repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use clinichub_core::error::{AppError, ErrorKind};
use clinichub_core::result::AppResult;
use clinichub_core::types::pagination::{PageRequest, PageResponse};
use clinichub_entity::user::model::CreateUser;
use clinichub_entity::user::{GrantedRole, User};

/// Repository for identity records and their role grants.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    /// Find a user by email. Matched exactly as stored (case-sensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    /// List all users with pagination, newest first.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<User>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count users", e))?;

        let users = sqlx::query_as::<_, User>(
            "SELECT * FROM users ORDER BY registered_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))?;

        Ok(PageResponse::new(
            users,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a new identity record.
    pub async fn create(&self, data: &CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (email, password_hash) VALUES ($1, $2) RETURNING *",
        )
        .bind(&data.email)
        .bind(&data.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("users_email_key") => {
                AppError::conflict("Email already in use".to_string())
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })
    }

    /// Grant a seeded role to a user by role name.
    pub async fn assign_role(&self, user_id: i64, role_name: &str) -> AppResult<()> {
        let result = sqlx::query(
            "INSERT INTO user_roles (user_id, role_id) \
             SELECT $1, id FROM roles WHERE name = $2 \
             ON CONFLICT DO NOTHING",
        )
        .bind(user_id)
        .bind(role_name)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to assign role", e))?;

        // Zero rows with no conflict means the role seed is missing.
        if result.rows_affected() == 0 {
            let exists: i64 = sqlx::query_scalar(
                "SELECT COUNT(*) FROM user_roles ur \
                 JOIN roles r ON r.id = ur.role_id \
                 WHERE ur.user_id = $1 AND r.name = $2",
            )
            .bind(user_id)
            .bind(role_name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to verify role grant", e)
            })?;

            if exists == 0 {
                return Err(AppError::configuration(format!(
                    "Role '{role_name}' is not seeded"
                )));
            }
        }

        Ok(())
    }

    /// Load the roles granted to a user, flattened with permission names.
    pub async fn granted_roles(&self, user_id: i64) -> AppResult<Vec<GrantedRole>> {
        let rows: Vec<(String, Option<String>)> = sqlx::query_as(
            "SELECT r.name, p.name \
             FROM user_roles ur \
             JOIN roles r ON r.id = ur.role_id \
             LEFT JOIN role_permissions rp ON rp.role_id = r.id \
             LEFT JOIN permissions p ON p.id = rp.permission_id \
             WHERE ur.user_id = $1 \
             ORDER BY r.name",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load roles", e))?;

        let mut granted: Vec<GrantedRole> = Vec::new();
        for (role_name, permission) in rows {
            match granted.iter_mut().find(|g| g.name == role_name) {
                Some(role) => {
                    if let Some(permission) = permission {
                        role.permissions.push(permission);
                    }
                }
                None => granted.push(GrantedRole {
                    name: role_name,
                    permissions: permission.into_iter().collect(),
                }),
            }
        }

        Ok(granted)
    }

    /// Set or clear a user's suspension end. Returns `false` when the id
    /// does not resolve.
    pub async fn set_suspension_end(
        &self,
        user_id: i64,
        suspension_end: Option<DateTime<Utc>>,
    ) -> AppResult<bool> {
        let result = sqlx::query("UPDATE users SET suspension_end = $2 WHERE id = $1")
            .bind(user_id)
            .bind(suspension_end)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update suspension", e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    /// Users whose suspension end has already elapsed at `now`.
    pub async fn find_suspension_expired(&self, now: DateTime<Utc>) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE suspension_end IS NOT NULL AND suspension_end < $1",
        )
        .bind(now)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list expired suspensions", e)
        })
    }

    /// Update last login timestamp.
    pub async fn update_last_login(&self, user_id: i64) -> AppResult<()> {
        sqlx::query("UPDATE users SET last_login_at = NOW() WHERE id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update last login", e)
            })?;
        Ok(())
    }

    /// Count total users.
    pub async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count users", e))?;
        Ok(count as u64)
    }
}

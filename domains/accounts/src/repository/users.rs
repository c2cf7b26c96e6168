//! User repository

use crate::domain::entities::{NewUser, User};
use async_trait::async_trait;
use jobboard_common::{db::is_unique_violation, Error, Result};
use sqlx::PgPool;

/// Credential store
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by (normalised) email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Insert a new user. A duplicate email is reported as `Error::Conflict`.
    async fn insert(&self, user: NewUser) -> Result<User>;
}

#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, mobile, password_hash, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn insert(&self, user: NewUser) -> Result<User> {
        let inserted = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, mobile, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, mobile, password_hash, created_at, updated_at
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.mobile)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                Error::Conflict("User already exists".to_string())
            } else {
                Error::Database(e)
            }
        })?;

        Ok(inserted)
    }
}

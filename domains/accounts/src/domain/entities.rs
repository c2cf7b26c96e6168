//! Accounts domain entities

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Registered user.
///
/// `password_hash` holds a bcrypt digest; the plaintext is never stored.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when inserting a user; the store assigns id and timestamps
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub password_hash: String,
}

impl NewUser {
    /// Materialise the user with a fresh id, as the database would.
    pub fn into_user(self) -> User {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            name: self.name,
            email: self.email,
            mobile: self.mobile,
            password_hash: self.password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Canonical form of an email address used as the uniqueness key
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

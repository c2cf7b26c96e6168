//! In-memory user repository
//!
//! Backs HTTP tests that run without PostgreSQL.
//! Thread-safe via `Arc<Mutex<>>`.

use crate::domain::entities::{NewUser, User};
use crate::repository::UserRepository;
use async_trait::async_trait;
use jobboard_common::{Error, Result};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<Mutex<Vec<User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub fn len(&self) -> usize {
        self.users.lock().map(|users| users.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<E: std::fmt::Display>(e: E) -> Error {
    Error::Internal(format!("users lock poisoned: {e}"))
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let users = self.users.lock().map_err(poisoned)?;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn insert(&self, user: NewUser) -> Result<User> {
        let mut users = self.users.lock().map_err(poisoned)?;
        if users.iter().any(|u| u.email == user.email) {
            return Err(Error::Conflict("User already exists".to_string()));
        }
        let user = user.into_user();
        users.push(user.clone());
        Ok(user)
    }
}

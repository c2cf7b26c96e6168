//! Accounts domain state and auth backend integration

use crate::repository::UserRepository;
use axum::extract::FromRef;
use jobboard_auth::AuthBackend;
use std::sync::Arc;

/// Application state for the Accounts domain
#[derive(Clone)]
pub struct AccountsState {
    pub users: Arc<dyn UserRepository>,
    pub auth: AuthBackend,
    /// bcrypt work factor for newly registered passwords
    pub bcrypt_cost: u32,
}

impl FromRef<AccountsState> for AuthBackend {
    fn from_ref(state: &AccountsState) -> Self {
        state.auth.clone()
    }
}

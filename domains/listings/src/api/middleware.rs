//! Listings domain state and auth backend integration

use crate::repository::JobListingRepository;
use axum::extract::FromRef;
use jobboard_auth::AuthBackend;
use std::sync::Arc;

/// Application state for the Listings domain
#[derive(Clone)]
pub struct ListingsState {
    pub listings: Arc<dyn JobListingRepository>,
    pub auth: AuthBackend,
    /// Logo stored when a listing has no usable logo URL
    pub default_logo_url: String,
}

impl FromRef<ListingsState> for AuthBackend {
    fn from_ref(state: &ListingsState) -> Self {
        state.auth.clone()
    }
}

//! Session tokens for the job board API
//!
//! Provides JWT issuing and validation plus axum extractors that work with
//! any domain state implementing `FromRef<S>` for `AuthBackend`.

mod backend;
mod claims;
mod config;
mod context;
mod error;
mod extractors;
mod jwt;

pub use backend::AuthBackend;
pub use claims::SessionClaims;
pub use config::{AuthConfig, TokenPurpose};
pub use context::AuthContext;
pub use error::AuthError;
pub use extractors::AuthUser;

//! Concrete authentication backend
//!
//! Owns the auth configuration and turns user ids into session tokens and
//! session tokens back into an `AuthContext`. No storage lookups happen
//! here; a valid signature is sufficient.

use uuid::Uuid;

use crate::claims::SessionClaims;
use crate::config::{AuthConfig, TokenPurpose};
use crate::context::AuthContext;
use crate::error::AuthError;
use crate::jwt::{encode_jwt_token, validate_jwt_token};

/// Concrete authentication backend.
///
/// Domain states expose this via `FromRef`:
/// ```ignore
/// impl FromRef<MyDomainState> for AuthBackend {
///     fn from_ref(state: &MyDomainState) -> Self {
///         state.auth.clone()
///     }
/// }
/// ```
#[derive(Clone)]
pub struct AuthBackend {
    config: AuthConfig,
}

impl AuthBackend {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Issue a session token for `user_id` with the lifetime of `purpose`
    pub fn issue_token(&self, user_id: Uuid, purpose: TokenPurpose) -> Result<String, AuthError> {
        let now = chrono::Utc::now().timestamp().max(0) as u64;
        let claims = SessionClaims {
            sub: user_id.to_string(),
            iat: now,
            exp: now.saturating_add(self.config.ttl_secs(purpose)),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
        };

        let token = encode_jwt_token(&claims, &self.config)?;
        tracing::debug!(user_id = %user_id, purpose = ?purpose, "Issued session token");
        Ok(token)
    }

    /// Verify a session token and extract the caller's identity
    pub fn authenticate(&self, token: &str) -> Result<AuthContext, AuthError> {
        let claims = validate_jwt_token(token, &self.config)?;

        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AuthError::InvalidUserId)?;

        Ok(AuthContext::new(user_id))
    }
}

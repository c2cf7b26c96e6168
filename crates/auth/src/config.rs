//! Authentication configuration

use jobboard_common::Config;

/// Operation a session token is issued for.
///
/// Each purpose carries its own lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenPurpose {
    Registration,
    Login,
}

/// Authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub issuer: Option<String>,
    pub audience: Option<String>,
    pub register_token_ttl_secs: u64,
    pub login_token_ttl_secs: u64,
}

impl AuthConfig {
    /// Token lifetime in seconds for the given purpose
    pub fn ttl_secs(&self, purpose: TokenPurpose) -> u64 {
        match purpose {
            TokenPurpose::Registration => self.register_token_ttl_secs,
            TokenPurpose::Login => self.login_token_ttl_secs,
        }
    }
}

impl From<&Config> for AuthConfig {
    fn from(config: &Config) -> Self {
        Self {
            jwt_secret: config.jwt_secret.clone(),
            issuer: config.jwt_issuer.clone(),
            audience: config.jwt_audience.clone(),
            register_token_ttl_secs: config.register_token_ttl_secs,
            login_token_ttl_secs: config.login_token_ttl_secs,
        }
    }
}

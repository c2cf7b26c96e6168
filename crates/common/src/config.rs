//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Fallback logo used when a job listing has no usable logo URL
pub const DEFAULT_LOGO_URL: &str = "https://eu.ui-avatars.com/api/?name=Company&size=250";

/// bcrypt work factor used when `BCRYPT_COST` is unset
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// TTL applied to tokens issued on registration
pub const DEFAULT_REGISTER_TOKEN_TTL_SECS: u64 = 300;

/// TTL applied to tokens issued on login
pub const DEFAULT_LOGIN_TOKEN_TTL_SECS: u64 = 3000;

/// Longest token lifetime accepted from the environment (one year)
pub const MAX_TOKEN_TTL_SECS: u64 = 365 * 24 * 60 * 60;

/// How long a request waits for a pooled database connection
pub const DEFAULT_DATABASE_ACQUIRE_TIMEOUT_SECS: u64 = 3;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Database connection URL (PostgreSQL)
    pub database_url: String,
    pub database_max_connections: u32,
    pub database_acquire_timeout_secs: u64,

    /// Token signing
    pub jwt_secret: String,
    pub jwt_issuer: Option<String>,
    pub jwt_audience: Option<String>,
    pub register_token_ttl_secs: u64,
    pub login_token_ttl_secs: u64,

    /// bcrypt work factor
    pub bcrypt_cost: u32,

    /// Job listing defaults
    pub default_logo_url: String,

    /// HTTP
    pub cors_allowed_origins: Option<String>,
    pub port: u16,

    /// Runtime configuration
    pub rust_log: String,
    pub log_format: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// `from_env` delegates here; tests pass a closure over a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| anyhow::anyhow!("{} is required", key))
        };

        let bcrypt_cost = parse_or(&lookup, "BCRYPT_COST", DEFAULT_BCRYPT_COST)?;
        if !(4..=31).contains(&bcrypt_cost) {
            anyhow::bail!("BCRYPT_COST must be between 4 and 31, got {}", bcrypt_cost);
        }

        let register_token_ttl_secs = parse_or(
            &lookup,
            "REGISTER_TOKEN_TTL_SECS",
            DEFAULT_REGISTER_TOKEN_TTL_SECS,
        )?;
        let login_token_ttl_secs =
            parse_or(&lookup, "LOGIN_TOKEN_TTL_SECS", DEFAULT_LOGIN_TOKEN_TTL_SECS)?;
        for (key, ttl) in [
            ("REGISTER_TOKEN_TTL_SECS", register_token_ttl_secs),
            ("LOGIN_TOKEN_TTL_SECS", login_token_ttl_secs),
        ] {
            if !(1..=MAX_TOKEN_TTL_SECS).contains(&ttl) {
                anyhow::bail!(
                    "{} must be between 1 and {}, got {}",
                    key,
                    MAX_TOKEN_TTL_SECS,
                    ttl
                );
            }
        }

        let config = Self {
            database_url: required("DATABASE_URL")?,
            database_max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 10)?,
            database_acquire_timeout_secs: parse_or(
                &lookup,
                "DATABASE_ACQUIRE_TIMEOUT_SECS",
                DEFAULT_DATABASE_ACQUIRE_TIMEOUT_SECS,
            )?,

            jwt_secret: required("JWT_SECRET")?,
            jwt_issuer: lookup("JWT_ISSUER").filter(|v| !v.is_empty()),
            jwt_audience: lookup("JWT_AUDIENCE").filter(|v| !v.is_empty()),
            register_token_ttl_secs,
            login_token_ttl_secs,

            bcrypt_cost,

            default_logo_url: lookup("DEFAULT_LOGO_URL")
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_LOGO_URL.to_string()),

            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS").filter(|v| !v.is_empty()),
            port: parse_or(&lookup, "PORT", 4000)?,

            rust_log: lookup("RUST_LOG")
                .unwrap_or_else(|| "jobboard=debug,tower_http=info".to_string()),
            log_format: lookup("LOG_FORMAT").unwrap_or_else(|| "pretty".to_string()),
        };

        Ok(config)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key).filter(|v| !v.is_empty()) {
        Some(raw) => raw
            .parse()
            .map_err(|e| anyhow::anyhow!("{} is invalid: {}", key, e)),
        None => Ok(default),
    }
}

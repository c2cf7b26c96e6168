//! Shared utilities, configuration, and error handling for the job board
//!
//! This crate provides common functionality used across the job board crates:
//! - Configuration management following 12-factor principles
//! - Error types and the `{"error": ...}` response shape
//! - Password hashing and request field checks
//! - Database helpers and storage health checks

pub mod config;
pub mod crypto;
pub mod db;
pub mod error;
pub mod extractors;
pub mod validation;

pub use config::Config;
pub use crypto::{
    hash_password, hash_password_blocking, verify_password, verify_password_blocking,
};
pub use db::{
    connect_lazy_pool, is_unique_violation, PgStoreHealth, StaticStoreHealth, StoreHealth,
};
pub use error::{Error, Result};
pub use extractors::ValidatedJson;
pub use validation::validate_not_blank;

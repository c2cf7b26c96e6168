//! Shared database helpers for the job board
//!
//! Repositories in the domain crates use these to classify driver errors and
//! to report whether the backing store is reachable. The server binary builds
//! its pool here.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::Config;

/// SQLSTATE raised by PostgreSQL for a UNIQUE constraint violation
const UNIQUE_VIOLATION: &str = "23505";

/// Whether a driver error was caused by a UNIQUE constraint.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some(UNIQUE_VIOLATION),
        _ => false,
    }
}

/// Build a pool without opening a connection.
///
/// Connections are established on first use, so the server can start while
/// the database is still unreachable. Every acquire, including the health
/// probe, gives up after `database_acquire_timeout_secs`.
pub fn connect_lazy_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .acquire_timeout(Duration::from_secs(config.database_acquire_timeout_secs))
        .connect_lazy(&config.database_url)
}

/// Reports whether the backing store can currently serve queries.
#[async_trait]
pub trait StoreHealth: Send + Sync {
    async fn is_connected(&self) -> bool;
}

/// PostgreSQL health probe
#[derive(Clone)]
pub struct PgStoreHealth {
    pool: PgPool,
}

impl PgStoreHealth {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoreHealth for PgStoreHealth {
    async fn is_connected(&self) -> bool {
        match sqlx::query("SELECT 1").execute(&self.pool).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Database health check failed");
                false
            }
        }
    }
}

/// Health probe with a fixed answer, for tests and local wiring.
#[derive(Debug, Clone, Copy)]
pub struct StaticStoreHealth(pub bool);

#[async_trait]
impl StoreHealth for StaticStoreHealth {
    async fn is_connected(&self) -> bool {
        self.0
    }
}

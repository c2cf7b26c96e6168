//! Job board application composition root
//!
//! Composes all domain routers into a single application.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderValue, Method},
    routing::get,
    Json, Router,
};
use jobboard_accounts::{AccountsState, PgUserRepository, UserRepository};
use jobboard_auth::{AuthBackend, AuthConfig};
use jobboard_common::{Config, Error, PgStoreHealth, StoreHealth};
use jobboard_listings::{JobListingRepository, ListingsState, PgJobListingRepository};
use serde_json::{json, Value};
use sqlx::PgPool;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

/// Largest request body accepted, in bytes
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Storage collaborators the routers run against
#[derive(Clone)]
pub struct AppDependencies {
    pub users: Arc<dyn UserRepository>,
    pub listings: Arc<dyn JobListingRepository>,
    pub health: Arc<dyn StoreHealth>,
}

impl AppDependencies {
    /// PostgreSQL-backed stores sharing one pool
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            users: Arc::new(PgUserRepository::new(pool.clone())),
            listings: Arc::new(PgJobListingRepository::new(pool.clone())),
            health: Arc::new(PgStoreHealth::new(pool)),
        }
    }
}

/// Create the main application router with all routes
pub fn create_app(config: &Config, deps: AppDependencies) -> Router {
    let auth = AuthBackend::new(AuthConfig::from(config));

    let accounts_state = AccountsState {
        users: deps.users,
        auth: auth.clone(),
        bcrypt_cost: config.bcrypt_cost,
    };

    let listings_state = ListingsState {
        listings: deps.listings,
        auth,
        default_logo_url: config.default_logo_url.clone(),
    };

    // Compose domain routers with shared infrastructure routes
    Router::new()
        .route("/", get(|| async { "Job Board API is running" }))
        .route("/health", get(health_check).with_state(deps.health))
        .merge(jobboard_accounts::routes().with_state(accounts_state))
        .merge(jobboard_listings::routes().with_state(listings_state))
        .fallback(not_found)
}

/// Wrap the router with tracing, CORS and body size limits
pub fn with_middleware(app: Router, config: &Config) -> Router {
    // Applied innermost-first so the order matches trace -> cors -> body limit
    app.layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(build_cors_layer(config.cors_allowed_origins.as_deref()))
        .layer(TraceLayer::new_for_http())
}

/// Permissive CORS unless an origin list is configured
pub fn build_cors_layer(allowed_origins: Option<&str>) -> CorsLayer {
    let Some(raw) = allowed_origins else {
        return CorsLayer::permissive();
    };

    let origins: Vec<HeaderValue> = raw
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
}

/// Health check endpoint
async fn health_check(State(health): State<Arc<dyn StoreHealth>>) -> Json<Value> {
    let database = if health.is_connected().await {
        "Connected"
    } else {
        "Disconnected"
    };

    Json(json!({
        "server": "Running",
        "database": database,
    }))
}

async fn not_found() -> Error {
    Error::NotFound("Not found".to_string())
}

//! Route definitions for Listings domain API

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::listings;
use super::middleware::ListingsState;

/// Create job posting routes (authenticated)
fn posting_routes() -> Router<ListingsState> {
    Router::new()
        .route("/job-posting", post(listings::create_listing))
        .route("/job-posting/{id}", put(listings::update_listing))
}

/// Create job search routes (public)
fn search_routes() -> Router<ListingsState> {
    Router::new()
        .route("/jobs", get(listings::list_listings))
        .route("/jobs/{job_id}", get(listings::get_listing))
}

/// Create all Listings domain API routes
pub fn routes() -> Router<ListingsState> {
    Router::new()
        .merge(posting_routes())
        .merge(search_routes())
}

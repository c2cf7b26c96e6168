//! Listings domain: job postings, search and filtering

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{JobListing, ListingFields};
pub use domain::filter::ListingFilter;

// Re-export repository types
#[cfg(any(test, feature = "test-support"))]
pub use repository::InMemoryJobListingRepository;
pub use repository::{JobListingRepository, PgJobListingRepository};

// Re-export API types
pub use api::routes;
pub use api::ListingsState;

//! Repository implementations for Listings domain

pub mod listings;
#[cfg(any(test, feature = "test-support"))]
pub mod memory;

pub use listings::{JobListingRepository, PgJobListingRepository};
#[cfg(any(test, feature = "test-support"))]
pub use memory::InMemoryJobListingRepository;

//! In-memory job listing repository
//!
//! Backs HTTP tests that run without PostgreSQL.
//! Thread-safe via `Arc<Mutex<>>`.

use crate::domain::entities::{JobListing, ListingFields};
use crate::domain::filter::ListingFilter;
use crate::repository::JobListingRepository;
use async_trait::async_trait;
use jobboard_common::{Error, Result};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Listings kept in insertion order
#[derive(Debug, Clone, Default)]
pub struct InMemoryJobListingRepository {
    listings: Arc<Mutex<Vec<JobListing>>>,
}

impl InMemoryJobListingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored listing
    pub fn all(&self) -> Vec<JobListing> {
        self.listings
            .lock()
            .map(|listings| listings.clone())
            .unwrap_or_default()
    }
}

fn poisoned<E: std::fmt::Display>(e: E) -> Error {
    Error::Internal(format!("listings lock poisoned: {e}"))
}

#[async_trait]
impl JobListingRepository for InMemoryJobListingRepository {
    async fn insert(&self, fields: ListingFields, created_by: Uuid) -> Result<JobListing> {
        let listing = JobListing::from_fields(fields, Some(created_by));
        self.listings
            .lock()
            .map_err(poisoned)?
            .push(listing.clone());
        Ok(listing)
    }

    async fn replace(&self, id: Uuid, fields: ListingFields) -> Result<Option<JobListing>> {
        let mut listings = self.listings.lock().map_err(poisoned)?;
        Ok(listings.iter_mut().find(|l| l.id == id).map(|listing| {
            listing.apply(fields);
            listing.clone()
        }))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<JobListing>> {
        let listings = self.listings.lock().map_err(poisoned)?;
        Ok(listings.iter().find(|l| l.id == id).cloned())
    }

    async fn list(&self, filter: &ListingFilter) -> Result<Vec<JobListing>> {
        let listings = self.listings.lock().map_err(poisoned)?;
        // Later inserts win ties on created_at
        let mut matching: Vec<JobListing> = listings
            .iter()
            .rev()
            .filter(|l| filter.matches(l))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matching)
    }
}

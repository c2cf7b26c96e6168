//! Listings domain layer: entities, filtering, validation

pub mod entities;
pub mod filter;
pub mod validation;

//! API endpoint integration tests
//!
//! Drives the composed router end to end against in-memory stores. The
//! `postgres` module repeats the storage paths against a real database when
//! one is configured.

#![allow(dead_code)]

mod accounts;
mod common;
mod listings;
mod platform;
mod postgres;

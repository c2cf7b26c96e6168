//! Repository implementations for Accounts domain

#[cfg(any(test, feature = "test-support"))]
pub mod memory;
pub mod users;

#[cfg(any(test, feature = "test-support"))]
pub use memory::InMemoryUserRepository;
pub use users::{PgUserRepository, UserRepository};

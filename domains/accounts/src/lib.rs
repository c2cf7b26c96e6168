//! Accounts domain: users, registration, login

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{NewUser, User};

// Re-export repository types
#[cfg(any(test, feature = "test-support"))]
pub use repository::InMemoryUserRepository;
pub use repository::{PgUserRepository, UserRepository};

// Re-export API types
pub use api::routes;
pub use api::AccountsState;

//! Port contracts for the user directory.
//!
//! Ports define infrastructure-agnostic interfaces used by user services.

pub mod repository;

pub use repository::{UserRepository, UserRepositoryError, UserRepositoryResult};

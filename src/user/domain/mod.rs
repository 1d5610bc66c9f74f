//! Domain model for the user directory.
//!
//! The user domain models account identity, role membership, and the
//! validated scalars both are built from, keeping persistence and transport
//! concerns outside of the domain boundary.

mod error;
mod ids;
mod user;

pub use error::{ParseRoleError, UserDomainError};
pub use ids::{EmailAddress, UserId, UserName};
pub use user::{PersistedUserData, Role, User};

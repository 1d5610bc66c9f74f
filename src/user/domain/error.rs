//! Error types for user domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain user values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserDomainError {
    /// The user name is empty after trimming.
    #[error("user name must not be empty")]
    EmptyName,

    /// The email address is not structurally valid.
    #[error("invalid email address '{0}'")]
    InvalidEmail(String),

    /// The supplied password is empty after trimming.
    #[error("password must not be empty")]
    BlankPassword,
}

/// Error returned while parsing roles from persistence or the wire.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown user role: {0}")]
pub struct ParseRoleError(pub String);

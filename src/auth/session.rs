//! Session token storage port.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Access and refresh token pair returned by the login endpoint.
///
/// The refresh token is stored but advisory only: on authentication failure
/// the session is cleared and the user re-authenticates, no silent refresh
/// is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Bearer token attached to every request.
    pub access_token: String,
    /// Refresh token, persisted for completeness.
    pub refresh_token: String,
}

impl TokenPair {
    /// Creates a token pair from raw token strings.
    #[must_use]
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        }
    }
}

/// Result type for session store operations.
pub type SessionStoreResult<T> = Result<T, SessionStoreError>;

/// Persistent storage contract for the session token pair.
///
/// Implementations are synchronous: stores hold a single small record and
/// are consulted on every request, so blocking I/O stays out of them or
/// stays trivially short.
pub trait SessionStore: Send + Sync {
    /// Loads the stored token pair, if any.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError`] when the backing storage fails.
    fn load(&self) -> SessionStoreResult<Option<TokenPair>>;

    /// Replaces the stored token pair.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError`] when the backing storage fails.
    fn save(&self, tokens: &TokenPair) -> SessionStoreResult<()>;

    /// Removes any stored token pair.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError`] when the backing storage fails.
    fn clear(&self) -> SessionStoreResult<()>;

    /// Returns `true` when a non-empty access token is stored.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError`] when the backing storage fails.
    fn is_authenticated(&self) -> SessionStoreResult<bool> {
        Ok(self
            .load()?
            .is_some_and(|tokens| !tokens.access_token.is_empty()))
    }
}

/// Errors returned by session store implementations.
#[derive(Debug, Clone, Error)]
pub enum SessionStoreError {
    /// The stored session record could not be decoded.
    #[error("corrupt session record: {0}")]
    Corrupt(String),

    /// Storage-layer failure.
    #[error("session storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl SessionStoreError {
    /// Wraps a storage error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}

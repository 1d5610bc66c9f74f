//! In-memory session store for tests and ephemeral sessions.

use crate::auth::session::{SessionStore, SessionStoreError, SessionStoreResult, TokenPair};
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory session store.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    tokens: Arc<RwLock<Option<TokenPair>>>,
}

impl InMemorySessionStore {
    /// Creates an empty session store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> SessionStoreError {
    SessionStoreError::storage(std::io::Error::other(err.to_string()))
}

impl SessionStore for InMemorySessionStore {
    fn load(&self) -> SessionStoreResult<Option<TokenPair>> {
        let tokens = self.tokens.read().map_err(lock_poisoned)?;
        Ok(tokens.clone())
    }

    fn save(&self, new_tokens: &TokenPair) -> SessionStoreResult<()> {
        let mut tokens = self.tokens.write().map_err(lock_poisoned)?;
        *tokens = Some(new_tokens.clone());
        Ok(())
    }

    fn clear(&self) -> SessionStoreResult<()> {
        let mut tokens = self.tokens.write().map_err(lock_poisoned)?;
        *tokens = None;
        Ok(())
    }
}

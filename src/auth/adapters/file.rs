//! File-backed session store over a capability-scoped directory.
//!
//! The browser client persisted tokens in `localStorage`; this adapter plays
//! the same role for native callers. Tokens are written as one JSON document
//! inside a directory the caller has opened ahead of time, so the store can
//! never escape its granted capability.

use crate::auth::session::{SessionStore, SessionStoreError, SessionStoreResult, TokenPair};
use cap_std::fs_utf8::Dir;
use std::io::ErrorKind;

/// Name of the session record inside the scoped directory.
const SESSION_FILE: &str = "session.json";

/// Session store persisting tokens to a capability-scoped directory.
#[derive(Debug)]
pub struct FileSessionStore {
    dir: Dir,
}

impl FileSessionStore {
    /// Creates a store over an already-opened directory capability.
    #[must_use]
    pub const fn new(dir: Dir) -> Self {
        Self { dir }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> SessionStoreResult<Option<TokenPair>> {
        let contents = match self.dir.read_to_string(SESSION_FILE) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(SessionStoreError::storage(err)),
        };
        let tokens = serde_json::from_str::<TokenPair>(&contents)
            .map_err(|err| SessionStoreError::Corrupt(err.to_string()))?;
        Ok(Some(tokens))
    }

    fn save(&self, tokens: &TokenPair) -> SessionStoreResult<()> {
        let contents =
            serde_json::to_vec_pretty(tokens).map_err(SessionStoreError::storage)?;
        self.dir
            .write(SESSION_FILE, contents)
            .map_err(SessionStoreError::storage)
    }

    fn clear(&self) -> SessionStoreResult<()> {
        match self.dir.remove_file(SESSION_FILE) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(SessionStoreError::storage(err)),
        }
    }
}

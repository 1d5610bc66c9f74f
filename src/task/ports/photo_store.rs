//! Storage port for completion photo payloads.

use crate::task::domain::{PhotoPayload, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for photo store operations.
pub type PhotoStoreResult<T> = Result<T, PhotoStoreError>;

/// Write-side contract for storing photo evidence payloads.
///
/// Implementations return the URL at which the stored photo can later be
/// retrieved; the URL is recorded on the evidence record, not re-derived.
#[async_trait]
pub trait PhotoStore: Send + Sync {
    /// Stores a photo payload for a task and returns its retrieval URL.
    ///
    /// # Errors
    ///
    /// Returns [`PhotoStoreError::Storage`] when the payload cannot be
    /// written.
    async fn store(&self, task_id: TaskId, payload: &PhotoPayload) -> PhotoStoreResult<String>;
}

/// Errors returned by photo store implementations.
#[derive(Debug, Clone, Error)]
pub enum PhotoStoreError {
    /// The payload could not be written to the backing store.
    #[error("photo storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl PhotoStoreError {
    /// Wraps a storage error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}

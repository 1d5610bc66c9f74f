//! Shared helpers for crate-level integration tests.

use async_trait::async_trait;
use cronobra::task::{
    domain::{PhotoPayload, TaskId},
    ports::{PhotoStore, PhotoStoreResult},
};

/// Photo store that derives a deterministic URL without touching disk.
#[derive(Debug, Default)]
pub struct MemoryPhotoStore;

#[async_trait]
impl PhotoStore for MemoryPhotoStore {
    async fn store(&self, task_id: TaskId, payload: &PhotoPayload) -> PhotoStoreResult<String> {
        Ok(format!("photos/{task_id}/{}", payload.file_name()))
    }
}

//! Filesystem photo store over a capability-scoped directory.
//!
//! Photos land under one subdirectory per task, named by the task
//! identifier. Stored names are prefixed with a fresh UUID so repeated
//! uploads of the same file name never clobber earlier evidence.

use crate::task::{
    domain::{PhotoPayload, TaskId},
    ports::{PhotoStore, PhotoStoreError, PhotoStoreResult},
};
use async_trait::async_trait;
use cap_std::fs_utf8::Dir;
use uuid::Uuid;

/// Photo store writing payloads to a capability-scoped directory.
#[derive(Debug)]
pub struct FsPhotoStore {
    dir: Dir,
}

impl FsPhotoStore {
    /// Creates a store over an already-opened directory capability.
    #[must_use]
    pub const fn new(dir: Dir) -> Self {
        Self { dir }
    }
}

#[async_trait]
impl PhotoStore for FsPhotoStore {
    async fn store(&self, task_id: TaskId, payload: &PhotoPayload) -> PhotoStoreResult<String> {
        let task_dir = task_id.to_string();
        self.dir
            .create_dir_all(&task_dir)
            .map_err(PhotoStoreError::storage)?;
        let stored_name = format!("{}-{}", Uuid::new_v4(), payload.file_name());
        self.dir
            .write(format!("{task_dir}/{stored_name}"), payload.bytes())
            .map_err(PhotoStoreError::storage)?;
        Ok(format!("photos/{task_dir}/{stored_name}"))
    }
}

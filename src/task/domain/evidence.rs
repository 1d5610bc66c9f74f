//! Photographic evidence substantiating task completion.

use super::{EvidenceId, TaskDomainError, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Raw photo bytes submitted with a completion, non-empty by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoPayload {
    file_name: String,
    content_type: String,
    bytes: Vec<u8>,
}

impl PhotoPayload {
    /// Creates a validated photo payload.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyPhoto`] when no bytes are supplied.
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<Self, TaskDomainError> {
        if bytes.is_empty() {
            return Err(TaskDomainError::EmptyPhoto);
        }
        Ok(Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        })
    }

    /// Returns the submitted file name.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the declared content type.
    #[must_use]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Returns the photo bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the SHA-256 hex digest of the photo bytes.
    #[must_use]
    pub fn content_digest(&self) -> String {
        let digest = Sha256::digest(&self.bytes);
        digest.iter().map(|byte| format!("{byte:02x}")).collect()
    }
}

/// One immutable photographic evidence record.
///
/// A task accumulates one record per completion event; rejection for rework
/// never removes earlier records, so the full history stays reviewable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    id: EvidenceId,
    task_id: TaskId,
    photo_url: String,
    content_digest: String,
    metadata: Option<String>,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted evidence record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedEvidenceData {
    /// Persisted evidence identifier.
    pub id: EvidenceId,
    /// Persisted task reference.
    pub task_id: TaskId,
    /// Persisted photo location.
    pub photo_url: String,
    /// Persisted SHA-256 hex digest of the photo bytes.
    pub content_digest: String,
    /// Persisted caller-supplied metadata.
    pub metadata: Option<String>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Evidence {
    /// Creates a new evidence record for a stored photo.
    #[must_use]
    pub fn new(
        task_id: TaskId,
        photo_url: impl Into<String>,
        content_digest: impl Into<String>,
        metadata: Option<String>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: EvidenceId::new(),
            task_id,
            photo_url: photo_url.into(),
            content_digest: content_digest.into(),
            metadata,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs an evidence record from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedEvidenceData) -> Self {
        Self {
            id: data.id,
            task_id: data.task_id,
            photo_url: data.photo_url,
            content_digest: data.content_digest,
            metadata: data.metadata,
            created_at: data.created_at,
        }
    }

    /// Returns the evidence identifier.
    #[must_use]
    pub const fn id(&self) -> EvidenceId {
        self.id
    }

    /// Returns the task this evidence belongs to.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the stored photo location.
    #[must_use]
    pub fn photo_url(&self) -> &str {
        &self.photo_url
    }

    /// Returns the SHA-256 hex digest of the photo bytes.
    #[must_use]
    pub fn content_digest(&self) -> &str {
        &self.content_digest
    }

    /// Returns the caller-supplied metadata, if any.
    #[must_use]
    pub fn metadata(&self) -> Option<&str> {
        self.metadata.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

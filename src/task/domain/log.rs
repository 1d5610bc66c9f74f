//! Append-only audit trail for task lifecycle actions.

use super::{ParseLogActionError, TaskId, TaskLogId, TaskStatus};
use crate::user::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Kind of state-changing action an audit entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogAction {
    /// The task was created.
    Created,
    /// The task moved to a new status without evidence.
    StatusChanged,
    /// Evidence was uploaded alongside a completion.
    EvidenceUploaded,
    /// An administrator updated the task (approve/reject review verdicts).
    Updated,
}

impl LogAction {
    /// Returns the canonical wire and storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "CREATED",
            Self::StatusChanged => "STATUS_CHANGED",
            Self::EvidenceUploaded => "EVIDENCE_UPLOADED",
            Self::Updated => "UPDATED",
        }
    }
}

impl TryFrom<&str> for LogAction {
    type Error = ParseLogActionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "CREATED" => Ok(Self::Created),
            "STATUS_CHANGED" => Ok(Self::StatusChanged),
            "EVIDENCE_UPLOADED" => Ok(Self::EvidenceUploaded),
            "UPDATED" => Ok(Self::Updated),
            _ => Err(ParseLogActionError(value.to_owned())),
        }
    }
}

/// One immutable audit record of a state-changing action on a task.
///
/// Entries are appended atomically with the status write they describe and
/// are never mutated or deleted afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskLog {
    id: TaskLogId,
    task_id: TaskId,
    action: LogAction,
    from_status: Option<TaskStatus>,
    to_status: Option<TaskStatus>,
    note: Option<String>,
    actor: UserId,
    timestamp: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted audit entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskLogData {
    /// Persisted entry identifier.
    pub id: TaskLogId,
    /// Persisted task reference.
    pub task_id: TaskId,
    /// Persisted action kind.
    pub action: LogAction,
    /// Persisted previous status, if any.
    pub from_status: Option<TaskStatus>,
    /// Persisted new status, if any.
    pub to_status: Option<TaskStatus>,
    /// Persisted free-form note.
    pub note: Option<String>,
    /// Persisted acting user.
    pub actor: UserId,
    /// Persisted recording timestamp.
    pub timestamp: DateTime<Utc>,
}

impl TaskLog {
    /// Records a new audit entry at the current clock time.
    #[must_use]
    pub fn record(
        task_id: TaskId,
        action: LogAction,
        from_status: Option<TaskStatus>,
        to_status: Option<TaskStatus>,
        actor: UserId,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: TaskLogId::new(),
            task_id,
            action,
            from_status,
            to_status,
            note: None,
            actor,
            timestamp: clock.utc(),
        }
    }

    /// Attaches a free-form note (e.g. a review verdict).
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Reconstructs an audit entry from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskLogData) -> Self {
        Self {
            id: data.id,
            task_id: data.task_id,
            action: data.action,
            from_status: data.from_status,
            to_status: data.to_status,
            note: data.note,
            actor: data.actor,
            timestamp: data.timestamp,
        }
    }

    /// Returns the entry identifier.
    #[must_use]
    pub const fn id(&self) -> TaskLogId {
        self.id
    }

    /// Returns the task this entry belongs to.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the action kind.
    #[must_use]
    pub const fn action(&self) -> LogAction {
        self.action
    }

    /// Returns the status the task held before the action, if any.
    #[must_use]
    pub const fn from_status(&self) -> Option<TaskStatus> {
        self.from_status
    }

    /// Returns the status the action produced, if any.
    #[must_use]
    pub const fn to_status(&self) -> Option<TaskStatus> {
        self.to_status
    }

    /// Returns the free-form note, if any.
    #[must_use]
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    /// Returns the acting user's identifier.
    #[must_use]
    pub const fn actor(&self) -> UserId {
        self.actor
    }

    /// Returns the recording timestamp.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

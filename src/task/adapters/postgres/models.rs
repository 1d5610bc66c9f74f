//! Diesel row models for task persistence.

use super::schema::{task_evidence, task_logs, tasks};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning schedule identifier.
    pub schedule_id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Assigned worker identifier.
    pub assigned_to: uuid::Uuid,
    /// Lifecycle status name.
    pub status: String,
    /// Due date.
    pub due_date: DateTime<Utc>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest lifecycle timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning schedule identifier.
    pub schedule_id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Assigned worker identifier.
    pub assigned_to: uuid::Uuid,
    /// Lifecycle status name.
    pub status: String,
    /// Due date.
    pub due_date: DateTime<Utc>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest lifecycle timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Query result row for audit entries.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = task_logs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskLogRow {
    /// Audit entry identifier.
    pub id: uuid::Uuid,
    /// Task the entry belongs to.
    pub task_id: uuid::Uuid,
    /// Action kind name.
    pub action: String,
    /// Status held before the action.
    pub from_status: Option<String>,
    /// Status produced by the action.
    pub to_status: Option<String>,
    /// Free-form note.
    pub note: Option<String>,
    /// Acting user identifier.
    pub actor: uuid::Uuid,
    /// Recording timestamp.
    pub timestamp: DateTime<Utc>,
}

/// Insert model for audit entries.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = task_logs)]
pub struct NewTaskLogRow {
    /// Audit entry identifier.
    pub id: uuid::Uuid,
    /// Task the entry belongs to.
    pub task_id: uuid::Uuid,
    /// Action kind name.
    pub action: String,
    /// Status held before the action.
    pub from_status: Option<String>,
    /// Status produced by the action.
    pub to_status: Option<String>,
    /// Free-form note.
    pub note: Option<String>,
    /// Acting user identifier.
    pub actor: uuid::Uuid,
    /// Recording timestamp.
    pub timestamp: DateTime<Utc>,
}

/// Query result row for evidence records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = task_evidence)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct EvidenceRow {
    /// Evidence identifier.
    pub id: uuid::Uuid,
    /// Task the evidence belongs to.
    pub task_id: uuid::Uuid,
    /// Stored photo location.
    pub photo_url: String,
    /// SHA-256 hex digest of the photo bytes.
    pub content_digest: String,
    /// Caller-supplied metadata.
    pub metadata: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for evidence records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = task_evidence)]
pub struct NewEvidenceRow {
    /// Evidence identifier.
    pub id: uuid::Uuid,
    /// Task the evidence belongs to.
    pub task_id: uuid::Uuid,
    /// Stored photo location.
    pub photo_url: String,
    /// SHA-256 hex digest of the photo bytes.
    pub content_digest: String,
    /// Caller-supplied metadata.
    pub metadata: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

//! Error types for task domain validation and parsing.

use super::{TaskId, TaskStatus};
use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task description is empty after trimming.
    #[error("task description must not be empty")]
    EmptyDescription,

    /// The requested status change is not in the transition table.
    #[error("invalid status transition for task {task_id}: {from} -> {to}")]
    InvalidStatusTransition {
        /// The task the transition was requested on.
        task_id: TaskId,
        /// Status the task currently holds.
        from: TaskStatus,
        /// Status that was requested.
        to: TaskStatus,
    },

    /// The evidence photo payload carries no bytes.
    #[error("evidence photo must not be empty")]
    EmptyPhoto,
}

/// Error returned while parsing task statuses from persistence or the wire.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing audit log actions from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown log action: {0}")]
pub struct ParseLogActionError(pub String);

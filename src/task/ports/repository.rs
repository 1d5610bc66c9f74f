//! Repository port for task, audit trail, and evidence persistence.
//!
//! Each write method is an atomic unit pairing a status write with the
//! audit entry that describes it, so the two can never be observed
//! inconsistent. Transition writes carry the status the caller read the
//! task in; implementations apply the write only if that status still
//! holds, which serializes concurrent transitions on the same task.

use crate::schedule::domain::ScheduleId;
use crate::task::domain::{Evidence, Task, TaskId, TaskLog, TaskStatus};
use crate::user::domain::UserId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task together with its `CREATED` audit entry.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID
    /// already exists.
    async fn create(&self, task: &Task, log: &TaskLog) -> TaskRepositoryResult<()>;

    /// Applies a status transition together with its audit entry.
    ///
    /// `expected_from` is the status the caller read before computing the
    /// transition; the write is applied only while it still holds.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist and [`TaskRepositoryError::StaleStatus`] when a concurrent
    /// transition won the race.
    async fn apply_transition(
        &self,
        task: &Task,
        expected_from: TaskStatus,
        log: &TaskLog,
    ) -> TaskRepositoryResult<()>;

    /// Applies a completion: status transition, evidence record, and audit
    /// entry as one unit.
    ///
    /// # Errors
    ///
    /// Same contract as [`TaskRepository::apply_transition`].
    async fn apply_completion(
        &self,
        task: &Task,
        expected_from: TaskStatus,
        evidence: &Evidence,
        log: &TaskLog,
    ) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns all tasks ordered by creation time.
    async fn list(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns all tasks belonging to a schedule.
    async fn find_by_schedule(&self, schedule_id: ScheduleId) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns all tasks assigned to a user.
    async fn find_by_assignee(&self, assigned_to: UserId) -> TaskRepositoryResult<Vec<Task>>;

    /// Counts the tasks belonging to a schedule.
    async fn count_for_schedule(&self, schedule_id: ScheduleId) -> TaskRepositoryResult<usize>;

    /// Returns a task's audit trail, newest entry first.
    async fn logs_for_task(&self, task_id: TaskId) -> TaskRepositoryResult<Vec<TaskLog>>;

    /// Returns a task's evidence records, oldest first.
    async fn evidence_for_task(&self, task_id: TaskId) -> TaskRepositoryResult<Vec<Evidence>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// A concurrent transition changed the task's status first.
    #[error("stale status for task {task_id}: expected {expected}, found {actual}")]
    StaleStatus {
        /// The task the write was attempted on.
        task_id: TaskId,
        /// Status the caller read before the write.
        expected: TaskStatus,
        /// Status actually stored at write time.
        actual: TaskStatus,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

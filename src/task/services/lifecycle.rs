//! Service layer orchestrating the task lifecycle.
//!
//! Every mutation here pairs the status write with its audit entry through
//! one repository call, so a crash between the two cannot leave a status
//! change without a matching trail entry. Authorization is enforced before
//! any write: administrators create and review, assignees progress.

use crate::auth::{AccessError, Principal};
use crate::schedule::{
    domain::ScheduleId,
    ports::{ScheduleRepository, ScheduleRepositoryError},
};
use crate::task::{
    domain::{
        Evidence, LogAction, PhotoPayload, Task, TaskDomainError, TaskId, TaskLog, TaskStatus,
    },
    ports::{
        PhotoStore, PhotoStoreError, TaskRepository, TaskRepositoryError,
    },
};
use crate::user::{
    domain::{Role, UserId},
    ports::{UserRepository, UserRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    /// Owning schedule.
    pub schedule_id: ScheduleId,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Worker the task is assigned to.
    pub assigned_to: UserId,
    /// Due date.
    pub due_date: DateTime<Utc>,
}

/// Request payload for completing a task with photo evidence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompleteTaskRequest {
    /// Task being completed.
    pub task_id: TaskId,
    /// Submitted photo file name.
    pub photo_file_name: String,
    /// Declared photo content type.
    pub photo_content_type: String,
    /// Raw photo bytes.
    pub photo_bytes: Vec<u8>,
    /// Optional caller-supplied metadata.
    pub metadata: Option<String>,
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation or transition check failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Role or ownership check failed.
    #[error(transparent)]
    Access(#[from] AccessError),
    /// The referenced task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// The referenced schedule does not exist.
    #[error("schedule not found: {0}")]
    ScheduleNotFound(ScheduleId),
    /// The referenced assignee does not exist.
    #[error("assignee not found: {0}")]
    AssigneeNotFound(UserId),
    /// Tasks can only be assigned to workers.
    #[error("user {0} is not a worker and cannot be assigned tasks")]
    AssigneeNotWorker(UserId),
    /// Photo storage failed.
    #[error(transparent)]
    Photos(#[from] PhotoStoreError),
    /// Task repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// Schedule repository lookup failed.
    #[error(transparent)]
    Schedules(#[from] ScheduleRepositoryError),
    /// User repository lookup failed.
    #[error(transparent)]
    Users(#[from] UserRepositoryError),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
#[derive(Clone)]
pub struct TaskLifecycleService<R, S, U, P, C>
where
    R: TaskRepository,
    S: ScheduleRepository,
    U: UserRepository,
    P: PhotoStore,
    C: Clock + Send + Sync,
{
    tasks: Arc<R>,
    schedules: Arc<S>,
    users: Arc<U>,
    photos: Arc<P>,
    clock: Arc<C>,
}

impl<R, S, U, P, C> TaskLifecycleService<R, S, U, P, C>
where
    R: TaskRepository,
    S: ScheduleRepository,
    U: UserRepository,
    P: PhotoStore,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(
        tasks: Arc<R>,
        schedules: Arc<S>,
        users: Arc<U>,
        photos: Arc<P>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            tasks,
            schedules,
            users,
            photos,
            clock,
        }
    }

    /// Creates a task inside a schedule on behalf of an administrator.
    ///
    /// The owning schedule and the assignee are both checked up front; the
    /// assignee must hold the worker role.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::ScheduleNotFound`],
    /// [`TaskLifecycleError::AssigneeNotFound`], or
    /// [`TaskLifecycleError::AssigneeNotWorker`] when a reference check
    /// fails, plus the access/domain variants.
    pub async fn create_task(
        &self,
        actor: &Principal,
        request: CreateTaskRequest,
    ) -> TaskLifecycleResult<Task> {
        actor.ensure_admin()?;

        self.schedules
            .find_by_id(request.schedule_id)
            .await?
            .ok_or(TaskLifecycleError::ScheduleNotFound(request.schedule_id))?;
        let assignee = self
            .users
            .find_by_id(request.assigned_to)
            .await?
            .ok_or(TaskLifecycleError::AssigneeNotFound(request.assigned_to))?;
        if assignee.role() != Role::Worker {
            return Err(TaskLifecycleError::AssigneeNotWorker(request.assigned_to));
        }

        let task = Task::new(
            request.schedule_id,
            request.title,
            request.description,
            request.assigned_to,
            request.due_date,
            &*self.clock,
        )?;
        let log = TaskLog::record(
            task.id(),
            LogAction::Created,
            None,
            Some(TaskStatus::Pending),
            actor.user_id(),
            &*self.clock,
        );
        self.tasks.create(&task, &log).await?;
        tracing::debug!(task_id = %task.id(), schedule_id = %task.schedule_id(), "task created");
        Ok(task)
    }

    /// Moves a task from `Pending` to `InProgress` on behalf of its
    /// assignee.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Access`] when the actor is not the
    /// assignee and [`TaskLifecycleError::Domain`] when the task is not in
    /// `Pending`.
    pub async fn start_task(&self, actor: &Principal, id: TaskId) -> TaskLifecycleResult<Task> {
        let mut task = self.load(id).await?;
        actor.ensure_assignee(task.assigned_to())?;

        let from = task.status();
        task.transition_to(TaskStatus::InProgress, &*self.clock)?;
        let log = TaskLog::record(
            task.id(),
            LogAction::StatusChanged,
            Some(from),
            Some(task.status()),
            actor.user_id(),
            &*self.clock,
        );
        self.apply_transition(&task, from, &log).await?;
        Ok(task)
    }

    /// Completes a task with photo evidence on behalf of its assignee.
    ///
    /// The photo is validated before the status is touched, so an empty
    /// upload never advances the task. On success the status write, the
    /// evidence record, and the audit entry land as one unit.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] with
    /// [`TaskDomainError::EmptyPhoto`] for an empty upload, the usual
    /// access/transition variants otherwise.
    pub async fn complete_task(
        &self,
        actor: &Principal,
        request: CompleteTaskRequest,
    ) -> TaskLifecycleResult<Task> {
        let payload = PhotoPayload::new(
            request.photo_file_name,
            request.photo_content_type,
            request.photo_bytes,
        )?;

        let mut task = self.load(request.task_id).await?;
        actor.ensure_assignee(task.assigned_to())?;

        let from = task.status();
        task.transition_to(TaskStatus::Completed, &*self.clock)?;

        let photo_url = self.photos.store(task.id(), &payload).await?;
        let evidence = Evidence::new(
            task.id(),
            photo_url,
            payload.content_digest(),
            request.metadata,
            &*self.clock,
        );
        let log = TaskLog::record(
            task.id(),
            LogAction::EvidenceUploaded,
            Some(from),
            Some(task.status()),
            actor.user_id(),
            &*self.clock,
        );
        self.tasks
            .apply_completion(&task, from, &evidence, &log)
            .await
            .map_err(|err| remap_stale(err, task.status()))?;
        tracing::debug!(task_id = %task.id(), evidence_id = %evidence.id(), "task completed");
        Ok(task)
    }

    /// Approves a completed task on behalf of an administrator.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when the task is not in
    /// `Completed`.
    pub async fn approve_task(&self, actor: &Principal, id: TaskId) -> TaskLifecycleResult<Task> {
        self.review(actor, id, TaskStatus::Approved, "approved")
            .await
    }

    /// Rejects a completed task back to `Pending` for rework.
    ///
    /// Evidence uploaded with the rejected completion is kept; the next
    /// completion appends a fresh record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when the task is not in
    /// `Completed`.
    pub async fn reject_task(&self, actor: &Principal, id: TaskId) -> TaskLifecycleResult<Task> {
        self.review(actor, id, TaskStatus::Pending, "rejected").await
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn task(&self, id: TaskId) -> TaskLifecycleResult<Option<Task>> {
        Ok(self.tasks.find_by_id(id).await?)
    }

    /// Lists all tasks ordered by creation time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the listing fails.
    pub async fn tasks(&self) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.tasks.list().await?)
    }

    /// Lists the tasks belonging to a schedule.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the listing fails.
    pub async fn tasks_for_schedule(
        &self,
        schedule_id: ScheduleId,
    ) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.tasks.find_by_schedule(schedule_id).await?)
    }

    /// Lists the tasks assigned to a user.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the listing fails.
    pub async fn tasks_for_assignee(&self, assigned_to: UserId) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.tasks.find_by_assignee(assigned_to).await?)
    }

    /// Returns a task's audit trail, newest entry first.
    ///
    /// Reserved for administrators.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Access`] for non-administrators and
    /// [`TaskLifecycleError::NotFound`] when the task does not exist.
    pub async fn logs(&self, actor: &Principal, id: TaskId) -> TaskLifecycleResult<Vec<TaskLog>> {
        actor.ensure_admin()?;
        self.load(id).await?;
        Ok(self.tasks.logs_for_task(id).await?)
    }

    /// Returns a task's evidence records, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not
    /// exist.
    pub async fn evidence_for_task(&self, id: TaskId) -> TaskLifecycleResult<Vec<Evidence>> {
        self.load(id).await?;
        Ok(self.tasks.evidence_for_task(id).await?)
    }

    async fn review(
        &self,
        actor: &Principal,
        id: TaskId,
        verdict: TaskStatus,
        note: &str,
    ) -> TaskLifecycleResult<Task> {
        actor.ensure_admin()?;
        let mut task = self.load(id).await?;

        let from = task.status();
        task.transition_to(verdict, &*self.clock)?;
        let log = TaskLog::record(
            task.id(),
            LogAction::Updated,
            Some(from),
            Some(task.status()),
            actor.user_id(),
            &*self.clock,
        )
        .with_note(note);
        self.apply_transition(&task, from, &log).await?;
        Ok(task)
    }

    async fn load(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        self.tasks
            .find_by_id(id)
            .await?
            .ok_or(TaskLifecycleError::NotFound(id))
    }

    async fn apply_transition(
        &self,
        task: &Task,
        expected_from: TaskStatus,
        log: &TaskLog,
    ) -> TaskLifecycleResult<()> {
        self.tasks
            .apply_transition(task, expected_from, log)
            .await
            .map_err(|err| remap_stale(err, task.status()))
    }
}

/// Reports a lost status race the same way an invalid transition is
/// reported: the stored status is the one the attempted move was not
/// valid from.
fn remap_stale(err: TaskRepositoryError, to: TaskStatus) -> TaskLifecycleError {
    match err {
        TaskRepositoryError::StaleStatus {
            task_id, actual, ..
        } => TaskLifecycleError::Domain(TaskDomainError::InvalidStatusTransition {
            task_id,
            from: actual,
            to,
        }),
        other => TaskLifecycleError::Repository(other),
    }
}

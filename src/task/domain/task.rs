//! Task aggregate root.

use super::{TaskDomainError, TaskId, TaskStatus, is_overdue};
use crate::schedule::domain::ScheduleId;
use crate::user::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
///
/// A task belongs to exactly one schedule and is assigned to exactly one
/// worker. Status changes go through [`Task::transition_to`], which enforces
/// the transition table; authorization is layered on top by the lifecycle
/// service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    schedule_id: ScheduleId,
    title: String,
    description: String,
    assigned_to: UserId,
    status: TaskStatus,
    due_date: DateTime<Utc>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owning schedule.
    pub schedule_id: ScheduleId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted assignee reference.
    pub assigned_to: UserId,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted due date.
    pub due_date: DateTime<Utc>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest lifecycle timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task in the `Pending` status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] or
    /// [`TaskDomainError::EmptyDescription`] when the corresponding field is
    /// blank after trimming.
    pub fn new(
        schedule_id: ScheduleId,
        title: impl Into<String>,
        description: impl Into<String>,
        assigned_to: UserId,
        due_date: DateTime<Utc>,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let raw_title = title.into();
        if raw_title.trim().is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        let raw_description = description.into();
        if raw_description.trim().is_empty() {
            return Err(TaskDomainError::EmptyDescription);
        }

        let timestamp = clock.utc();
        Ok(Self {
            id: TaskId::new(),
            schedule_id,
            title: raw_title.trim().to_owned(),
            description: raw_description.trim().to_owned(),
            assigned_to,
            status: TaskStatus::Pending,
            due_date,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            schedule_id: data.schedule_id,
            title: data.title,
            description: data.description,
            assigned_to: data.assigned_to,
            status: data.status,
            due_date: data.due_date,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning schedule's identifier.
    #[must_use]
    pub const fn schedule_id(&self) -> ScheduleId {
        self.schedule_id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the assignee's identifier.
    #[must_use]
    pub const fn assigned_to(&self) -> UserId {
        self.assigned_to
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> DateTime<Utc> {
        self.due_date
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest lifecycle timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns `true` when the task is past due and still live at `now`.
    #[must_use]
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        is_overdue(self.due_date, self.status, now)
    }

    /// Moves the task to a new status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStatusTransition`] when the change
    /// is not in the transition table.
    pub fn transition_to(
        &mut self,
        to: TaskStatus,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        if !self.status.can_transition_to(to) {
            return Err(TaskDomainError::InvalidStatusTransition {
                task_id: self.id,
                from: self.status,
                to,
            });
        }
        self.status = to;
        self.touch(clock);
        Ok(())
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

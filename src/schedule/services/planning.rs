//! Service layer for administrator-driven schedule planning.

use crate::auth::{AccessError, Principal};
use crate::schedule::{
    domain::{Schedule, ScheduleDomainError, ScheduleId, SchedulePeriod},
    ports::{ScheduleRepository, ScheduleRepositoryError},
};
use crate::task::ports::{TaskRepository, TaskRepositoryError};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateScheduleRequest {
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Start of the schedule period.
    pub start_date: DateTime<Utc>,
    /// End of the schedule period.
    pub end_date: DateTime<Utc>,
}

/// Request payload for partially updating a schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateScheduleRequest {
    /// New display name, when present.
    pub name: Option<String>,
    /// New description, when present.
    pub description: Option<String>,
    /// New period start, when present.
    pub start_date: Option<DateTime<Utc>>,
    /// New period end, when present.
    pub end_date: Option<DateTime<Utc>>,
}

/// Service-level errors for schedule planning operations.
#[derive(Debug, Error)]
pub enum SchedulePlanningError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] ScheduleDomainError),
    /// Role check failed.
    #[error(transparent)]
    Access(#[from] AccessError),
    /// The referenced schedule does not exist.
    #[error("schedule not found: {0}")]
    NotFound(ScheduleId),
    /// The schedule still owns tasks and cannot be deleted.
    #[error("schedule {id} still owns {task_count} task(s)")]
    ScheduleInUse {
        /// The schedule that was to be deleted.
        id: ScheduleId,
        /// Number of tasks still attached to it.
        task_count: usize,
    },
    /// Schedule repository operation failed.
    #[error(transparent)]
    Repository(#[from] ScheduleRepositoryError),
    /// Task repository lookup failed during the in-use check.
    #[error(transparent)]
    Tasks(#[from] TaskRepositoryError),
}

/// Result type for schedule planning service operations.
pub type SchedulePlanningResult<T> = Result<T, SchedulePlanningError>;

/// Schedule planning orchestration service.
#[derive(Clone)]
pub struct SchedulePlanningService<S, T, C>
where
    S: ScheduleRepository,
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    schedules: Arc<S>,
    tasks: Arc<T>,
    clock: Arc<C>,
}

impl<S, T, C> SchedulePlanningService<S, T, C>
where
    S: ScheduleRepository,
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new schedule planning service.
    #[must_use]
    pub const fn new(schedules: Arc<S>, tasks: Arc<T>, clock: Arc<C>) -> Self {
        Self {
            schedules,
            tasks,
            clock,
        }
    }

    /// Creates a new schedule on behalf of an administrator.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulePlanningError::Access`] when the actor is not an
    /// administrator and [`SchedulePlanningError::Domain`] when validation
    /// fails.
    pub async fn create_schedule(
        &self,
        actor: &Principal,
        request: CreateScheduleRequest,
    ) -> SchedulePlanningResult<Schedule> {
        actor.ensure_admin()?;
        let period = SchedulePeriod::new(request.start_date, request.end_date)?;
        let schedule = Schedule::new(
            request.name,
            request.description,
            period,
            actor.user_id(),
            &*self.clock,
        )?;
        self.schedules.store(&schedule).await?;
        tracing::debug!(schedule_id = %schedule.id(), "schedule created");
        Ok(schedule)
    }

    /// Applies a partial update to a schedule.
    ///
    /// Period bounds are validated against each other after applying
    /// whichever of the two the request carries.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulePlanningError::NotFound`] when the schedule does
    /// not exist, plus the access/domain variants of
    /// [`SchedulePlanningError`].
    pub async fn update_schedule(
        &self,
        actor: &Principal,
        id: ScheduleId,
        request: UpdateScheduleRequest,
    ) -> SchedulePlanningResult<Schedule> {
        actor.ensure_admin()?;
        let mut schedule = self
            .schedules
            .find_by_id(id)
            .await?
            .ok_or(SchedulePlanningError::NotFound(id))?;

        if let Some(name) = request.name {
            schedule.rename(name, &*self.clock)?;
        }
        if let Some(description) = request.description {
            schedule.describe(description, &*self.clock);
        }
        if request.start_date.is_some() || request.end_date.is_some() {
            let current = schedule.period();
            let period = SchedulePeriod::new(
                request.start_date.unwrap_or_else(|| current.start_date()),
                request.end_date.unwrap_or_else(|| current.end_date()),
            )?;
            schedule.reschedule(period, &*self.clock);
        }

        self.schedules.update(&schedule).await?;
        Ok(schedule)
    }

    /// Deletes a schedule that owns no tasks.
    ///
    /// There is no cascade: deleting a schedule that still owns tasks is
    /// refused so task history (and its audit trail) cannot vanish as a
    /// side effect.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulePlanningError::ScheduleInUse`] when tasks are still
    /// attached, [`SchedulePlanningError::NotFound`] when the schedule does
    /// not exist.
    pub async fn delete_schedule(
        &self,
        actor: &Principal,
        id: ScheduleId,
    ) -> SchedulePlanningResult<()> {
        actor.ensure_admin()?;
        let task_count = self.tasks.count_for_schedule(id).await?;
        if task_count > 0 {
            return Err(SchedulePlanningError::ScheduleInUse { id, task_count });
        }
        match self.schedules.delete(id).await {
            Ok(()) => Ok(()),
            Err(ScheduleRepositoryError::NotFound(missing)) => {
                Err(SchedulePlanningError::NotFound(missing))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Retrieves a schedule by identifier.
    ///
    /// Returns `Ok(None)` when the schedule does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulePlanningError::Repository`] when the lookup fails.
    pub async fn schedule(&self, id: ScheduleId) -> SchedulePlanningResult<Option<Schedule>> {
        Ok(self.schedules.find_by_id(id).await?)
    }

    /// Lists all schedules ordered by start date.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulePlanningError::Repository`] when the listing fails.
    pub async fn schedules(&self) -> SchedulePlanningResult<Vec<Schedule>> {
        Ok(self.schedules.list().await?)
    }
}

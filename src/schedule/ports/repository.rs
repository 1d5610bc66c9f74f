//! Repository port for schedule persistence and lookup.

use crate::schedule::domain::{Schedule, ScheduleId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for schedule repository operations.
pub type ScheduleRepositoryResult<T> = Result<T, ScheduleRepositoryError>;

/// Schedule persistence contract.
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// Stores a new schedule.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleRepositoryError::DuplicateSchedule`] when the
    /// schedule ID already exists.
    async fn store(&self, schedule: &Schedule) -> ScheduleRepositoryResult<()>;

    /// Persists changes to an existing schedule.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleRepositoryError::NotFound`] when the schedule does
    /// not exist.
    async fn update(&self, schedule: &Schedule) -> ScheduleRepositoryResult<()>;

    /// Deletes a schedule.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleRepositoryError::NotFound`] when the schedule does
    /// not exist.
    async fn delete(&self, id: ScheduleId) -> ScheduleRepositoryResult<()>;

    /// Finds a schedule by identifier.
    ///
    /// Returns `None` when the schedule does not exist.
    async fn find_by_id(&self, id: ScheduleId) -> ScheduleRepositoryResult<Option<Schedule>>;

    /// Returns all schedules ordered by start date.
    async fn list(&self) -> ScheduleRepositoryResult<Vec<Schedule>>;
}

/// Errors returned by schedule repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ScheduleRepositoryError {
    /// A schedule with the same identifier already exists.
    #[error("duplicate schedule identifier: {0}")]
    DuplicateSchedule(ScheduleId),

    /// The schedule was not found.
    #[error("schedule not found: {0}")]
    NotFound(ScheduleId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ScheduleRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

//! In-memory repository for schedule planning tests and local use.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::schedule::{
    domain::{Schedule, ScheduleId},
    ports::{ScheduleRepository, ScheduleRepositoryError, ScheduleRepositoryResult},
};

/// Thread-safe in-memory schedule repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryScheduleRepository {
    state: Arc<RwLock<HashMap<ScheduleId, Schedule>>>,
}

impl InMemoryScheduleRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> ScheduleRepositoryError {
    ScheduleRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ScheduleRepository for InMemoryScheduleRepository {
    async fn store(&self, schedule: &Schedule) -> ScheduleRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if state.contains_key(&schedule.id()) {
            return Err(ScheduleRepositoryError::DuplicateSchedule(schedule.id()));
        }
        state.insert(schedule.id(), schedule.clone());
        Ok(())
    }

    async fn update(&self, schedule: &Schedule) -> ScheduleRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let Some(stored) = state.get_mut(&schedule.id()) else {
            return Err(ScheduleRepositoryError::NotFound(schedule.id()));
        };
        *stored = schedule.clone();
        Ok(())
    }

    async fn delete(&self, id: ScheduleId) -> ScheduleRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if state.remove(&id).is_none() {
            return Err(ScheduleRepositoryError::NotFound(id));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: ScheduleId) -> ScheduleRepositoryResult<Option<Schedule>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.get(&id).cloned())
    }

    async fn list(&self) -> ScheduleRepositoryResult<Vec<Schedule>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let mut schedules: Vec<Schedule> = state.values().cloned().collect();
        schedules.sort_by_key(|schedule| schedule.period().start_date());
        Ok(schedules)
    }
}

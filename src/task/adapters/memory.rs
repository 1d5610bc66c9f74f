//! In-memory repository for task lifecycle tests and local use.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::schedule::domain::ScheduleId;
use crate::task::{
    domain::{Evidence, Task, TaskId, TaskLog, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use crate::user::domain::UserId;

#[derive(Debug, Default)]
struct State {
    tasks: HashMap<TaskId, Task>,
    // Per-task audit trails in insertion order; reads reverse them.
    logs: HashMap<TaskId, Vec<TaskLog>>,
    evidence: HashMap<TaskId, Vec<Evidence>>,
}

/// Thread-safe in-memory task repository.
///
/// Write methods hold the state lock across the status check and the
/// paired log/evidence appends, giving the same all-or-nothing visibility
/// as a database transaction.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<State>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

fn check_current_status(
    stored: &Task,
    expected_from: TaskStatus,
) -> TaskRepositoryResult<()> {
    if stored.status() != expected_from {
        return Err(TaskRepositoryError::StaleStatus {
            task_id: stored.id(),
            expected: expected_from,
            actual: stored.status(),
        });
    }
    Ok(())
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn create(&self, task: &Task, log: &TaskLog) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        state.tasks.insert(task.id(), task.clone());
        state.logs.entry(task.id()).or_default().push(log.clone());
        Ok(())
    }

    async fn apply_transition(
        &self,
        task: &Task,
        expected_from: TaskStatus,
        log: &TaskLog,
    ) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let Some(stored) = state.tasks.get_mut(&task.id()) else {
            return Err(TaskRepositoryError::NotFound(task.id()));
        };
        check_current_status(stored, expected_from)?;
        *stored = task.clone();
        state.logs.entry(task.id()).or_default().push(log.clone());
        Ok(())
    }

    async fn apply_completion(
        &self,
        task: &Task,
        expected_from: TaskStatus,
        evidence: &Evidence,
        log: &TaskLog,
    ) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let Some(stored) = state.tasks.get_mut(&task.id()) else {
            return Err(TaskRepositoryError::NotFound(task.id()));
        };
        check_current_status(stored, expected_from)?;
        *stored = task.clone();
        state
            .evidence
            .entry(task.id())
            .or_default()
            .push(evidence.clone());
        state.logs.entry(task.id()).or_default().push(log.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn list(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let mut tasks: Vec<Task> = state.tasks.values().cloned().collect();
        tasks.sort_by_key(Task::created_at);
        Ok(tasks)
    }

    async fn find_by_schedule(&self, schedule_id: ScheduleId) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let mut tasks: Vec<Task> = state
            .tasks
            .values()
            .filter(|task| task.schedule_id() == schedule_id)
            .cloned()
            .collect();
        tasks.sort_by_key(Task::created_at);
        Ok(tasks)
    }

    async fn find_by_assignee(&self, assigned_to: UserId) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let mut tasks: Vec<Task> = state
            .tasks
            .values()
            .filter(|task| task.assigned_to() == assigned_to)
            .cloned()
            .collect();
        tasks.sort_by_key(Task::created_at);
        Ok(tasks)
    }

    async fn count_for_schedule(&self, schedule_id: ScheduleId) -> TaskRepositoryResult<usize> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state
            .tasks
            .values()
            .filter(|task| task.schedule_id() == schedule_id)
            .count())
    }

    async fn logs_for_task(&self, task_id: TaskId) -> TaskRepositoryResult<Vec<TaskLog>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let mut logs = state.logs.get(&task_id).cloned().unwrap_or_default();
        logs.reverse();
        Ok(logs)
    }

    async fn evidence_for_task(&self, task_id: TaskId) -> TaskRepositoryResult<Vec<Evidence>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.evidence.get(&task_id).cloned().unwrap_or_default())
    }
}

//! Query cache with an explicit mutation-driven invalidation table.
//!
//! Fetched results are cached per partition key. After a mutation the
//! consuming layer invalidates exactly the partitions the mutation could
//! have changed, then refetches on demand; there is no optimistic update.
//! The mutation→partitions mapping lives in one table so a unit test can
//! enumerate every mutation's declared invalidation set.

use crate::schedule::domain::ScheduleId;
use crate::task::domain::TaskId;
use crate::user::domain::UserId;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::RwLock;

/// Cache partition identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    /// The schedule list.
    Schedules,
    /// One schedule's detail.
    Schedule(ScheduleId),
    /// The global task list.
    Tasks,
    /// One task's detail.
    Task(TaskId),
    /// One task's audit trail.
    TaskLogs(TaskId),
    /// One task's evidence records.
    TaskEvidence(TaskId),
    /// The user list.
    Users,
    /// The authenticated user.
    CurrentUser,
}

/// Mutations the backend exposes, as seen by the cache layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    /// A schedule was created.
    CreateSchedule,
    /// A schedule was updated.
    UpdateSchedule(ScheduleId),
    /// A schedule was deleted.
    DeleteSchedule(ScheduleId),
    /// A task was created.
    CreateTask,
    /// A task's status changed (start, complete, approve, reject).
    UpdateTaskStatus(TaskId),
    /// Evidence was uploaded for a task.
    UploadEvidence(TaskId),
    /// A user was created.
    CreateUser,
    /// A user was updated.
    UpdateUser(UserId),
    /// A user was deleted.
    DeleteUser(UserId),
}

impl Mutation {
    /// Returns the cache partitions this mutation invalidates.
    ///
    /// Status changes touch the task's detail, its audit trail, and the
    /// global list (list views render status badges). A freshly created
    /// entity has no detail partition yet, so creations invalidate the
    /// list alone.
    #[must_use]
    pub fn invalidation_set(self) -> Vec<QueryKey> {
        match self {
            Self::CreateSchedule => vec![QueryKey::Schedules],
            Self::UpdateSchedule(id) | Self::DeleteSchedule(id) => {
                vec![QueryKey::Schedules, QueryKey::Schedule(id)]
            }
            Self::CreateTask => vec![QueryKey::Tasks],
            Self::UpdateTaskStatus(id) => vec![
                QueryKey::Task(id),
                QueryKey::TaskLogs(id),
                QueryKey::Tasks,
            ],
            Self::UploadEvidence(id) => {
                vec![QueryKey::Task(id), QueryKey::TaskEvidence(id)]
            }
            // Only the user list caches per-user data.
            Self::CreateUser | Self::UpdateUser(_) | Self::DeleteUser(_) => {
                vec![QueryKey::Users]
            }
        }
    }
}

/// Thread-safe cache of fetched query results.
#[derive(Debug, Default)]
pub struct QueryCache {
    entries: RwLock<HashMap<QueryKey, Value>>,
}

impl QueryCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached value for a partition, if present.
    #[must_use]
    pub fn get(&self, key: QueryKey) -> Option<Value> {
        self.entries
            .read()
            .ok()
            .and_then(|entries| entries.get(&key).cloned())
    }

    /// Stores a fetched value under a partition key.
    pub fn put(&self, key: QueryKey, value: Value) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key, value);
        }
    }

    /// Drops every partition the mutation's invalidation set names.
    pub fn invalidate(&self, mutation: Mutation) {
        if let Ok(mut entries) = self.entries.write() {
            for key in mutation.invalidation_set() {
                entries.remove(&key);
            }
        }
    }

    /// Drops everything. Required on logout and on any 401.
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }
}

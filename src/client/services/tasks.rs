//! Task lifecycle endpoints.
//!
//! The client never computes a next status locally; every transition is a
//! server round-trip through `PATCH /tasks/{id}/status`, and the server
//! serializes concurrent transitions on the same task.

use super::decode;
use crate::client::error::ApiResult;
use crate::client::transport::ApiClient;
use crate::schedule::domain::ScheduleId;
use crate::task::domain::{Task, TaskId, TaskLog, TaskStatus};
use crate::user::domain::UserId;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;

/// Payload for `POST /tasks`.
#[derive(Debug, Clone, Serialize)]
pub struct NewTask {
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

/// Typed wrapper over the task endpoints.
pub struct TaskService<'a> {
    client: &'a ApiClient,
}

impl<'a> TaskService<'a> {
    /// Creates the service over a transport.
    #[must_use]
    pub const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Lists all tasks.
    ///
    /// # Errors
    ///
    /// Returns [`crate::client::error::ApiError`] per the taxonomy.
    pub async fn tasks(&self) -> ApiResult<Vec<Task>> {
        decode(self.client.get("/tasks").await?)
    }

    /// Fetches one task's detail.
    ///
    /// # Errors
    ///
    /// Returns [`crate::client::error::ApiError::NotFound`] for an unknown
    /// identifier.
    pub async fn task(&self, id: TaskId) -> ApiResult<Task> {
        decode(self.client.get(&format!("/tasks/{id}")).await?)
    }

    /// Creates a task.
    ///
    /// # Errors
    ///
    /// Returns [`crate::client::error::ApiError`] per the taxonomy.
    pub async fn create(&self, request: &NewTask) -> ApiResult<Task> {
        let body = serde_json::to_value(request)?;
        decode(self.client.post("/tasks", body).await?)
    }

    /// Requests a status transition.
    ///
    /// # Errors
    ///
    /// Returns [`crate::client::error::ApiError::InvalidTransition`] when
    /// the server refuses the move, including when a concurrent transition
    /// won the race.
    pub async fn transition(&self, id: TaskId, to: TaskStatus) -> ApiResult<Task> {
        let body = json!({ "status": to });
        decode(
            self.client
                .patch(&format!("/tasks/{id}/status"), body)
                .await?,
        )
    }

    /// Fetches a task's audit trail, newest entry first.
    ///
    /// # Errors
    ///
    /// Returns [`crate::client::error::ApiError::Forbidden`] for
    /// non-administrators.
    pub async fn logs(&self, id: TaskId) -> ApiResult<Vec<TaskLog>> {
        decode(self.client.get(&format!("/tasks/{id}/logs")).await?)
    }
}

//! Schedule planning endpoints.

use super::decode;
use crate::client::error::ApiResult;
use crate::client::transport::ApiClient;
use crate::schedule::domain::{Schedule, ScheduleId};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Payload for `POST /schedules`.
#[derive(Debug, Clone, Serialize)]
pub struct SchedulePayload {
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Start of the schedule period.
    pub start_date: DateTime<Utc>,
    /// End of the schedule period.
    pub end_date: DateTime<Utc>,
}

/// Partial payload for `PATCH /schedules/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScheduleChanges {
    /// New display name, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New period start, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    /// New period end, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
}

/// Typed wrapper over the schedule endpoints.
pub struct ScheduleService<'a> {
    client: &'a ApiClient,
}

impl<'a> ScheduleService<'a> {
    /// Creates the service over a transport.
    #[must_use]
    pub const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Lists all schedules.
    ///
    /// # Errors
    ///
    /// Returns [`crate::client::error::ApiError`] per the taxonomy.
    pub async fn schedules(&self) -> ApiResult<Vec<Schedule>> {
        decode(self.client.get("/schedules").await?)
    }

    /// Fetches one schedule's detail.
    ///
    /// # Errors
    ///
    /// Returns [`crate::client::error::ApiError::NotFound`] for an unknown
    /// identifier.
    pub async fn schedule(&self, id: ScheduleId) -> ApiResult<Schedule> {
        decode(self.client.get(&format!("/schedules/{id}")).await?)
    }

    /// Creates a schedule.
    ///
    /// # Errors
    ///
    /// Returns [`crate::client::error::ApiError`] per the taxonomy.
    pub async fn create(&self, payload: &SchedulePayload) -> ApiResult<Schedule> {
        let body = serde_json::to_value(payload)?;
        decode(self.client.post("/schedules", body).await?)
    }

    /// Applies a partial update to a schedule.
    ///
    /// # Errors
    ///
    /// Returns [`crate::client::error::ApiError`] per the taxonomy.
    pub async fn update(&self, id: ScheduleId, changes: &ScheduleChanges) -> ApiResult<Schedule> {
        let body = serde_json::to_value(changes)?;
        decode(self.client.patch(&format!("/schedules/{id}"), body).await?)
    }

    /// Deletes a schedule.
    ///
    /// # Errors
    ///
    /// Returns [`crate::client::error::ApiError`] per the taxonomy.
    pub async fn delete(&self, id: ScheduleId) -> ApiResult<()> {
        self.client.delete(&format!("/schedules/{id}")).await?;
        Ok(())
    }
}

//! Diesel row models for schedule persistence.

use super::schema::schedules;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for schedule records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = schedules)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ScheduleRow {
    /// Schedule identifier.
    pub id: uuid::Uuid,
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Start of the schedule period.
    pub start_date: DateTime<Utc>,
    /// End of the schedule period.
    pub end_date: DateTime<Utc>,
    /// Creating administrator.
    pub created_by: uuid::Uuid,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for schedule records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schedules)]
pub struct NewScheduleRow {
    /// Schedule identifier.
    pub id: uuid::Uuid,
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Start of the schedule period.
    pub start_date: DateTime<Utc>,
    /// End of the schedule period.
    pub end_date: DateTime<Utc>,
    /// Creating administrator.
    pub created_by: uuid::Uuid,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

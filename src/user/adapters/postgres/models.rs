//! Diesel row models for user persistence.

use super::schema::users;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for user records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    /// User identifier.
    pub id: uuid::Uuid,
    /// Display name.
    pub name: String,
    /// Normalized email address.
    pub email: String,
    /// Role name.
    pub role: String,
    /// Credential digest, never exposed beyond the adapter.
    pub password_digest: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow {
    /// User identifier.
    pub id: uuid::Uuid,
    /// Display name.
    pub name: String,
    /// Normalized email address.
    pub email: String,
    /// Role name.
    pub role: String,
    /// Credential digest.
    pub password_digest: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

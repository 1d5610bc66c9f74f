//! Schedule aggregate root and its bounded date range.

use super::{ScheduleDomainError, ScheduleId, ScheduleName};
use crate::user::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Bounded date range of a schedule, `start <= end` by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulePeriod {
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
}

impl SchedulePeriod {
    /// Creates a validated period.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleDomainError::InvertedPeriod`] when the end precedes
    /// the start.
    pub fn new(
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Result<Self, ScheduleDomainError> {
        if end_date < start_date {
            return Err(ScheduleDomainError::InvertedPeriod {
                start: start_date,
                end: end_date,
            });
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// Returns the start of the period.
    #[must_use]
    pub const fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    /// Returns the end of the period.
    #[must_use]
    pub const fn end_date(&self) -> DateTime<Utc> {
        self.end_date
    }
}

/// Schedule aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    id: ScheduleId,
    name: ScheduleName,
    description: String,
    period: SchedulePeriod,
    created_by: UserId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted schedule aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedScheduleData {
    /// Persisted schedule identifier.
    pub id: ScheduleId,
    /// Persisted display name.
    pub name: ScheduleName,
    /// Persisted description.
    pub description: String,
    /// Persisted date range.
    pub period: SchedulePeriod,
    /// Persisted creator reference.
    pub created_by: UserId,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Schedule {
    /// Creates a new schedule from validated raw inputs.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleDomainError`] when the name is blank or the period
    /// is inverted.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        period: SchedulePeriod,
        created_by: UserId,
        clock: &impl Clock,
    ) -> Result<Self, ScheduleDomainError> {
        let timestamp = clock.utc();
        Ok(Self {
            id: ScheduleId::new(),
            name: ScheduleName::new(name)?,
            description: description.into(),
            period,
            created_by,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a schedule from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedScheduleData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            description: data.description,
            period: data.period,
            created_by: data.created_by,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the schedule identifier.
    #[must_use]
    pub const fn id(&self) -> ScheduleId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub const fn name(&self) -> &ScheduleName {
        &self.name
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the date range.
    #[must_use]
    pub const fn period(&self) -> SchedulePeriod {
        self.period
    }

    /// Returns the creating administrator's identifier.
    #[must_use]
    pub const fn created_by(&self) -> UserId {
        self.created_by
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Renames the schedule.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleDomainError::EmptyName`] when the new name is blank.
    pub fn rename(
        &mut self,
        name: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<(), ScheduleDomainError> {
        self.name = ScheduleName::new(name)?;
        self.touch(clock);
        Ok(())
    }

    /// Replaces the description.
    pub fn describe(&mut self, description: impl Into<String>, clock: &impl Clock) {
        self.description = description.into();
        self.touch(clock);
    }

    /// Replaces the date range.
    pub fn reschedule(&mut self, period: SchedulePeriod, clock: &impl Clock) {
        self.period = period;
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

//! Domain model for construction schedules.

mod error;
mod ids;
mod schedule;

pub use error::ScheduleDomainError;
pub use ids::{ScheduleId, ScheduleName};
pub use schedule::{PersistedScheduleData, Schedule, SchedulePeriod};

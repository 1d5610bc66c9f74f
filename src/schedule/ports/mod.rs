//! Port contracts for schedule planning.
//!
//! Ports define infrastructure-agnostic interfaces used by schedule services.

pub mod repository;

pub use repository::{ScheduleRepository, ScheduleRepositoryError, ScheduleRepositoryResult};

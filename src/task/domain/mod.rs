//! Domain model for the task lifecycle.
//!
//! The task domain models assignment, the status state machine, completion
//! evidence, and the append-only audit trail, keeping all infrastructure
//! concerns outside of the domain boundary.

mod error;
mod evidence;
mod ids;
mod log;
mod status;
mod task;

pub use error::{ParseLogActionError, ParseTaskStatusError, TaskDomainError};
pub use evidence::{Evidence, PersistedEvidenceData, PhotoPayload};
pub use ids::{EvidenceId, TaskId, TaskLogId};
pub use log::{LogAction, PersistedTaskLogData, TaskLog};
pub use status::{TaskStatus, is_overdue};
pub use task::{PersistedTaskData, Task};

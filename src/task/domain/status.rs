//! Task status state machine and overdue detection.
//!
//! Two status schemes drifted apart in the system's history: a three-state
//! server vocabulary (`PENDING`, `IN_PROGRESS`, `COMPLETED`) and a
//! five-state client vocabulary adding `APPROVED` and `REJECTED`. This
//! module holds the reconciled canonical scheme: the full five-state
//! vocabulary with approval as a terminal transition and rejection looping
//! completed work back to `PENDING` for rework. `REJECTED` stays parseable
//! for rows written under the older scheme but no transition produces it.
//! Swapping schemes touches this file only.

use super::ParseTaskStatusError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Work has not started; the initial status, also reached again when an
    /// administrator rejects completed work.
    Pending,
    /// The assigned worker is executing the task.
    InProgress,
    /// The worker submitted evidence and awaits review.
    Completed,
    /// An administrator accepted the completed work.
    Approved,
    /// Legacy terminal status from the five-state scheme; readable from
    /// storage, never produced by a transition.
    Rejected,
}

impl TaskStatus {
    /// Returns the canonical wire and storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }

    /// Returns `true` when the requested status change is in the
    /// transition table.
    ///
    /// | From | To | Event |
    /// |---|---|---|
    /// | `Pending` | `InProgress` | worker starts |
    /// | `InProgress` | `Completed` | worker submits evidence |
    /// | `Completed` | `Approved` | admin approves |
    /// | `Completed` | `Pending` | admin rejects for rework |
    #[must_use]
    pub const fn can_transition_to(self, to: Self) -> bool {
        matches!(
            (self, to),
            (Self::Pending, Self::InProgress)
                | (Self::InProgress, Self::Completed)
                | (Self::Completed, Self::Approved)
                | (Self::Completed, Self::Pending)
        )
    }

    /// Returns `true` for statuses no transition leaves.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }
}

impl core::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "PENDING" => Ok(Self::Pending),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "COMPLETED" => Ok(Self::Completed),
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Returns `true` when a task's due date has passed and the task is still
/// live.
///
/// Overdue is a derived property: it is recomputed on every read against the
/// supplied `now` and never stored. A task in a terminal status is never
/// overdue, however far past its due date.
#[must_use]
pub fn is_overdue(due_date: DateTime<Utc>, status: TaskStatus, now: DateTime<Utc>) -> bool {
    now > due_date && !status.is_terminal()
}

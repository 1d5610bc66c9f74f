//! Task lifecycle management for Cronobra.
//!
//! This module implements the heart of the system: tasks move through a
//! validated status lifecycle (`PENDING → IN_PROGRESS → COMPLETED`, then an
//! administrator approves or rejects the completed work), every transition is
//! gated by role and assignee checks, and every state-changing action
//! appends exactly one audit log entry atomically with the status write.
//! Photographic evidence substantiates each completion and is never deleted,
//! so rework cycles accumulate a full evidence history. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;

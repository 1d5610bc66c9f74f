//! Cronobra: construction-site task tracking core.
//!
//! This crate provides the shared core of a task-tracking application for
//! construction sites: administrators plan schedules and assign tasks,
//! workers progress tasks through a status lifecycle and attach photographic
//! evidence, and administrators approve or reject completed work against an
//! append-only audit trail.
//!
//! # Architecture
//!
//! Cronobra follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, filesystem)
//!
//! # Modules
//!
//! - [`auth`]: Session tokens, principals, and role-based access guards
//! - [`user`]: User directory with admin and worker roles
//! - [`schedule`]: Construction schedules owning sets of tasks
//! - [`task`]: The task lifecycle state machine, evidence, and audit trail
//! - [`client`]: Typed REST client, field-casing transport edge, query cache

pub mod auth;
pub mod client;
pub mod schedule;
pub mod task;
pub mod user;

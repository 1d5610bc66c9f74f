//! Construction schedules for Cronobra.
//!
//! A schedule is a named project phase with a bounded date range, created by
//! an administrator and owning a set of tasks. The module follows hexagonal
//! architecture:
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

//! User directory for Cronobra.
//!
//! Users carry one of two roles: administrators plan schedules, create tasks,
//! and review completed work; workers execute assigned tasks. The first
//! administrator registers through a public bootstrap flow; every other
//! account is created by an administrator. The module follows hexagonal
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

//! Step definitions for task lifecycle behaviour scenarios.

mod given;
mod then;
mod when;
pub mod world;

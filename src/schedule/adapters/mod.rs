//! Adapter implementations for schedule planning ports.

pub mod memory;
pub mod postgres;

//! Adapter implementations for user directory ports.

pub mod memory;
pub mod postgres;

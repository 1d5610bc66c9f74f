//! Unit tests for the user directory.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

mod domain_tests;
mod service_tests;

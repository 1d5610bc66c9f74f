//! Unit tests for the schedule context.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

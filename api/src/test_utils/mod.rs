//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! `mockall` mocks of the repository port (`MockBrainstormSessionRepository`)
//! cover call expectations. The recording repository here wraps the real
//! in-memory adapter for tests that need working storage and call counts.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;

//! Test utilities
//!
//! Manual in-memory port implementations and test fixtures for unit tests.
//! The ports are small enough that hand-written fakes stay clearer than a
//! mocking framework.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;

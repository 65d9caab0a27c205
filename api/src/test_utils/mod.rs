//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The in-memory cache store lives in `adapters::memory`, so only the
//! upstream source and a failing cache need mocking here.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;

//! Integration test utilities for the board services
//!
//! Provides in-memory repository doubles and a fully wired service context
//! for end-to-end tests of the cross-context event flows.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;

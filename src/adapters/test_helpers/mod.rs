//! Test helpers for mocking dependencies in tests
//!
//! This module provides mock implementations of the core ports:
//! - `MockFileSystem`: In-memory filesystem simulation
//! - `MockModuleRuntime`: Module import simulation keyed by URL
//! - `MockUserInteraction`: Console output capture

mod mock_file_system;
mod mock_module_runtime;
mod mock_user_interaction;

pub use mock_file_system::MockFileSystem;
pub use mock_module_runtime::MockModuleRuntime;
pub use mock_user_interaction::MockUserInteraction;

//! Integration tests for monodocs.
//!
//! - `fixtures` - Test helpers for creating temporary monorepos
//! - `cli_tests` - CLI interface tests
//! - `config_tests` - Configuration loading through the binary
//! - `workflow_tests` - Library-level runs over fixture monorepos
//! - `snapshot_tests` - Output snapshot tests using insta

pub mod cli_tests;
pub mod config_tests;
pub mod fixtures;
pub mod snapshot_tests;

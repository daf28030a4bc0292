//! Utility module for monodocs.
//!
//! Path resolution for the tool directory, monorepo root and output tree.

mod paths;

pub use paths::{local_config_file, monorepo_root, output_dir, resolve_tool_dir};

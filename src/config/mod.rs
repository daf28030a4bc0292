//! Configuration module for monodocs.
//!
//! Handles loading and merging configuration from multiple sources:
//! - CLI arguments (highest priority)
//! - Tool-directory `.monodocs.toml`
//! - User-level `~/.config/monodocs/config.toml`

pub mod file;
mod types;

pub use file::{generate_example_config, load_config, project_config_path, PROJECT_CONFIG_FILE};
pub use types::{
    Config, ConfigLayer, InstallConfig, InstallLayer, PackagesConfig, PackagesLayer, SiteConfig,
    SiteLayer, DEFAULT_DEV_ADDR, DEFAULT_OUTPUT_DIR, DEFAULT_REQUIREMENTS,
};

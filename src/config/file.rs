//! Configuration file loading and parsing.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use super::types::{Config, ConfigLayer};
use crate::error::DocsError;

/// Name of the project-level config file inside the tool directory.
pub const PROJECT_CONFIG_FILE: &str = ".monodocs.toml";

/// Load configuration from the specified path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
fn load_config_from_path(path: &Path) -> Result<ConfigLayer> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let layer: ConfigLayer = toml::from_str(&content).map_err(|e| DocsError::InvalidConfig {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(layer)
}

/// Path of the project-level config file for a tool directory.
pub fn project_config_path(tool_dir: &Path) -> PathBuf {
    tool_dir.join(PROJECT_CONFIG_FILE)
}

/// Load configuration with proper priority and merging.
///
/// Searches for config files in order of priority (lowest to highest):
/// 1. `~/.config/monodocs/config.toml` (user-level, lowest priority)
/// 2. `.monodocs.toml` in the tool directory (project-level)
/// 3. CLI argument `--config <path>` (highest priority)
///
/// Missing or broken default files are skipped with a warning.
///
/// # Errors
///
/// Returns an error if the file given on the command line cannot be read or parsed.
pub fn load_config(cli_config_path: Option<&Path>, tool_dir: &Path) -> Result<Config> {
    let mut config = Config::default();

    if let Some(user_config_path) = Config::user_config_path() {
        merge_optional(&mut config, &user_config_path, "user");
    }

    merge_optional(&mut config, &project_config_path(tool_dir), "project");

    if let Some(cli_path) = cli_config_path {
        let cli_config = load_config_from_path(cli_path).with_context(|| {
            format!(
                "Failed to load config from CLI-specified path: {}",
                cli_path.display()
            )
        })?;
        debug!(path = %cli_path.display(), "loaded CLI config");
        config.merge(cli_config);
    }

    Ok(config)
}

fn merge_optional(config: &mut Config, path: &Path, scope: &str) {
    if !path.exists() {
        return;
    }

    match load_config_from_path(path) {
        Ok(loaded) => {
            debug!(path = %path.display(), scope, "loaded config");
            config.merge(loaded);
        }
        Err(e) => {
            warn!(path = %path.display(), scope, "ignoring config: {e:#}");
            eprintln!(
                "Warning: Failed to load {scope} config at {}: {e:#}",
                path.display()
            );
        }
    }
}

/// Generate an example configuration file with all options documented.
pub fn generate_example_config() -> String {
    r#"# monodocs configuration
# Place this file at ~/.config/monodocs/config.toml for global settings
# or .monodocs.toml in the tool directory for project-specific settings

[install]
# Install missing build dependencies before building
enabled = true

# Interpreter used to run pip
python = "python3"

# pip distributions the combined site needs
requirements = ["mkdocs", "mkdocs-material", "pymdown-extensions", "mkdocs-monorepo-plugin"]

[packages]
# Explicit list of packages (directories next to the tool directory).
# When empty, the monorepo root is scanned instead.
members = []

# Only scanned directories starting with this prefix are packages
namespace = ""

# Package names to leave out (glob syntax)
exclude = [
    # "legacy_*",
]

[site]
name = "Monorepo Documentation"

# Aggregator root; relative paths are resolved against the tool directory
# output_dir = "docs_all"

dev_addr = "127.0.0.1:8000"
open_browser = true
mkdocs = "mkdocs"

# Appended to every mkdocs invocation
# extra_args = "--strict"
"#
    .to_string()
}

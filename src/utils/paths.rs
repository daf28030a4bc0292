//! Path utilities.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::{DEFAULT_OUTPUT_DIR, PROJECT_CONFIG_FILE};

/// Resolve the tool directory to an absolute, canonical path.
///
/// Package docs are looked up next to the tool directory and the combined
/// site is written inside it.
///
/// # Errors
///
/// Returns an error if the directory does not exist or is not accessible.
pub fn resolve_tool_dir(start_dir: &Path) -> Result<PathBuf> {
    let dir = start_dir.canonicalize().with_context(|| {
        format!(
            "Cannot access directory '{}': path does not exist or is not accessible",
            start_dir.display()
        )
    })?;

    if !dir.is_dir() {
        anyhow::bail!("'{}' is not a directory", dir.display());
    }

    Ok(dir)
}

/// Get the monorepo root for a tool directory (its parent).
///
/// A tool directory at the filesystem root is its own monorepo root.
pub fn monorepo_root(tool_dir: &Path) -> PathBuf {
    tool_dir
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| tool_dir.to_path_buf())
}

/// Get the aggregator root.
///
/// `configured` overrides the default `docs_all`; relative paths are
/// resolved against the tool directory.
pub fn output_dir(tool_dir: &Path, configured: Option<&Path>) -> PathBuf {
    match configured {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => tool_dir.join(path),
        None => tool_dir.join(DEFAULT_OUTPUT_DIR),
    }
}

/// Find local config file in the tool directory.
pub fn local_config_file(tool_dir: &Path) -> Option<PathBuf> {
    let config_file = tool_dir.join(PROJECT_CONFIG_FILE);
    if config_file.exists() {
        Some(config_file)
    } else {
        None
    }
}

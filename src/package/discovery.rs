//! Monorepo package discovery.
//!
//! Packages come either from an explicit member list or from scanning the
//! directories next to the tool directory.

use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path};

use glob::Pattern;
use tracing::debug;

use super::types::{Package, PackageSource};
use crate::config::PackagesConfig;
use crate::error::{DocsError, Result};

/// Discover the packages of a monorepo.
///
/// The result is ordered and free of duplicates. Manifest members keep their
/// declared order; scanned directories are sorted by name. `skip_dir` (the
/// tool directory) is never reported as a package.
///
/// # Errors
///
/// Returns an error if an exclude pattern is invalid or the monorepo root
/// cannot be read while scanning.
pub fn discover_packages(
    monorepo_root: &Path,
    config: &PackagesConfig,
    skip_dir: Option<&Path>,
) -> Result<Vec<Package>> {
    let source = PackageSource::from_members(&config.members, &config.namespace);
    let exclude = compile_patterns(&config.exclude)?;

    debug!(root = %monorepo_root.display(), %source, "discovering packages");

    let names = match source {
        PackageSource::Manifest(members) => dedup_members(members)?,
        PackageSource::Scan { namespace } => {
            scan_directories(monorepo_root, &namespace, skip_dir)?
        }
    };

    Ok(names
        .into_iter()
        .filter(|name| {
            let excluded = exclude.iter().any(|p| p.matches(name));
            if excluded {
                debug!(package = %name, "excluded by pattern");
            }
            !excluded
        })
        .map(|name| Package::new(name, monorepo_root))
        .collect())
}

/// Compile exclude patterns, reporting the first invalid one.
fn compile_patterns(patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|e| DocsError::ConfigError {
                message: format!("invalid exclude pattern '{p}': {e}"),
            })
        })
        .collect()
}

/// Drop repeated and blank members, keeping the first occurrence.
///
/// Every member must name a single directory next to the tool directory.
fn dedup_members(members: Vec<String>) -> Result<Vec<String>> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for member in members {
        let name = member.trim().trim_end_matches('/');
        if name.is_empty() || seen.contains(name) {
            continue;
        }

        let mut components = Path::new(name).components();
        let single_dir = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );
        if !single_dir {
            return Err(DocsError::ConfigError {
                message: format!(
                    "invalid package member '{name}': expected a directory name in the monorepo root"
                ),
            });
        }

        seen.insert(name.to_string());
        names.push(name.to_string());
    }

    Ok(names)
}

/// List package directories under the monorepo root.
fn scan_directories(
    root: &Path,
    namespace: &str,
    skip_dir: Option<&Path>,
) -> Result<Vec<String>> {
    let entries = fs::read_dir(root).map_err(|source| DocsError::DiscoveryFailed {
        path: root.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();

    for entry in entries.flatten() {
        let path = entry.path();

        if !path.is_dir() {
            continue;
        }

        if skip_dir.is_some_and(|skip| skip == path) {
            continue;
        }

        let Some(name) = entry.file_name().to_str().map(String::from) else {
            continue;
        };

        // Hidden directories (.git, .venv, ...) are never packages
        if name.starts_with('.') || !name.starts_with(namespace) {
            continue;
        }

        names.push(name);
    }

    names.sort();

    Ok(names)
}

//! Type definitions for monorepo packages.

use std::fmt;
use std::path::{Path, PathBuf};

/// Name of the directory inside a package that holds its MkDocs project.
pub const DOCS_DIR_NAME: &str = "docs";

/// A package of the monorepo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    /// Package name, which is also its directory name under the monorepo root.
    name: String,
    /// Package directory.
    path: PathBuf,
}

impl Package {
    /// Create a package rooted at `<monorepo_root>/<name>`.
    pub fn new(name: impl Into<String>, monorepo_root: &Path) -> Self {
        let name = name.into();
        let path = monorepo_root.join(&name);
        Self { name, path }
    }

    /// Get the package name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the package directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Expected location of the package's documentation project.
    pub fn docs_dir(&self) -> PathBuf {
        self.path.join(DOCS_DIR_NAME)
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Where the list of packages comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageSource {
    /// Names listed explicitly in the config, in declared order.
    Manifest(Vec<String>),
    /// Directories under the monorepo root whose names start with the prefix.
    Scan { namespace: String },
}

impl PackageSource {
    /// Pick the manifest when members are configured, scanning otherwise.
    pub fn from_members(members: &[String], namespace: &str) -> Self {
        if members.is_empty() {
            PackageSource::Scan {
                namespace: namespace.to_string(),
            }
        } else {
            PackageSource::Manifest(members.to_vec())
        }
    }
}

impl fmt::Display for PackageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackageSource::Manifest(members) => write!(f, "manifest ({} members)", members.len()),
            PackageSource::Scan { namespace } if namespace.is_empty() => {
                write!(f, "directory scan")
            }
            PackageSource::Scan { namespace } => write!(f, "directory scan ({namespace}*)"),
        }
    }
}

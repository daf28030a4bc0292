//! Locating the MkDocs project of a package.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::package::Package;

/// Config file names MkDocs recognises at the root of a project.
pub const CONFIG_FILE_NAMES: &[&str] = &["mkdocs.yml", "mkdocs.yaml"];

/// Whether a directory can be added to the combined site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectValidity {
    /// Directory exists and contains an MkDocs config file.
    Valid,
    /// Directory exists but has no MkDocs config file.
    MissingConfig,
    /// No directory at the path (or it could not be read).
    MissingDirectory,
}

impl ProjectValidity {
    /// Check if the project can be aggregated.
    pub fn is_valid(&self) -> bool {
        matches!(self, ProjectValidity::Valid)
    }
}

impl fmt::Display for ProjectValidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectValidity::Valid => write!(f, "mkdocs project"),
            ProjectValidity::MissingConfig => write!(f, "no mkdocs.yml"),
            ProjectValidity::MissingDirectory => write!(f, "no docs directory"),
        }
    }
}

/// Expected documentation directory of a package: `<root>/<name>/docs`.
pub fn docs_dir(monorepo_root: &Path, package_name: &str) -> PathBuf {
    Package::new(package_name, monorepo_root).docs_dir()
}

/// Find the MkDocs config file inside a project directory.
pub fn config_file(docs_path: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| docs_path.join(name))
        .find(|path| path.is_file())
}

/// Classify a directory as a documentation project.
///
/// Read failures count as a missing directory so that one unreadable
/// package never stops the others from being aggregated.
pub fn check_project(docs_path: &Path) -> ProjectValidity {
    if !docs_path.is_dir() {
        return ProjectValidity::MissingDirectory;
    }

    if config_file(docs_path).is_some() {
        ProjectValidity::Valid
    } else {
        ProjectValidity::MissingConfig
    }
}

/// Check if a directory is a buildable MkDocs project.
pub fn is_docs_project(docs_path: &Path) -> bool {
    check_project(docs_path).is_valid()
}

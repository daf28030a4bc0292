//! monodocs - monorepo documentation aggregator
//!
//! Finds the packages of a monorepo, picks the ones that carry an MkDocs
//! project under `<package>/docs`, and builds them into one combined site
//! with `mkdocs` and `mkdocs-monorepo-plugin`, installing those tools first
//! when they are missing.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface argument parsing
//! - [`config`] - Configuration file loading and types
//! - [`docs`] - Docs project location, aggregation and site generation
//! - [`error`] - Error types and result helpers
//! - [`installer`] - Build dependency installation
//! - [`package`] - Monorepo package discovery
//! - [`utils`] - Path utilities
//! - [`workflow`] - The end-to-end run
//!
//! # Example
//!
//! ```no_run
//! use monodocs::docs::{is_docs_project, MkDocs, MonorepoDocs};
//! use monodocs::package::discover_packages;
//! use monodocs::config::PackagesConfig;
//! use std::path::Path;
//!
//! let root = Path::new("./my-monorepo");
//! let packages = discover_packages(root, &PackagesConfig::default(), None)?;
//!
//! let mut docs = MonorepoDocs::new(root.join("tools/docs_all"));
//! for package in &packages {
//!     if is_docs_project(&package.docs_dir()) {
//!         docs.add_project(package.docs_dir(), package.name())?;
//!     }
//! }
//! docs.generate(&mut MkDocs::default())?;
//! # Ok::<(), monodocs::DocsError>(())
//! ```

/// CLI argument definitions.
pub mod cli;

/// Configuration system for loading and merging settings.
pub mod config;

/// Documentation projects and the combined site.
pub mod docs;

/// Error types and result helpers.
pub mod error;

/// Build dependency installation.
pub mod installer;

/// Monorepo package discovery.
pub mod package;

/// Path utilities.
pub mod utils;

/// The end-to-end run.
pub mod workflow;

// Re-export commonly used types
pub use cli::Cli;
pub use config::Config;
pub use docs::{MonorepoDocs, ProjectValidity};
pub use error::{DocsError, Result};
pub use package::Package;

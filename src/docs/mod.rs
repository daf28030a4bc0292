//! Documentation module for monodocs.
//!
//! Locates the MkDocs project of each package and combines the valid ones
//! into a single site built by `mkdocs` with the monorepo plugin.

mod aggregator;
mod generator;
pub mod layout;
mod locator;

pub use aggregator::{AggregatorState, DocsProject, GeneratedSite, MonorepoDocs};
pub use generator::{browser_command, MkDocs, Presentation, SiteGenerator};
pub use locator::{
    check_project, config_file, docs_dir, is_docs_project, ProjectValidity, CONFIG_FILE_NAMES,
};

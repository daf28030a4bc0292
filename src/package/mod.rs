//! Package module for monodocs.
//!
//! Finds the packages of the monorepo whose documentation may be aggregated.

mod discovery;
mod types;

pub use discovery::discover_packages;
pub use types::{Package, PackageSource, DOCS_DIR_NAME};

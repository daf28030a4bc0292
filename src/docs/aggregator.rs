//! Aggregating documentation projects into one site.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{debug, info};

use super::generator::SiteGenerator;
use super::layout::{write_layout, SITE_DIR};
use super::locator::check_project;
use crate::error::{DocsError, Result};

/// A documentation project added to the combined site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocsProject {
    docs_path: PathBuf,
    name: String,
}

impl DocsProject {
    /// Create a project entry.
    pub fn new(docs_path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            docs_path: docs_path.into(),
            name: name.into(),
        }
    }

    /// Get the project's docs directory.
    pub fn docs_path(&self) -> &Path {
        &self.docs_path
    }

    /// Get the project name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Lifecycle of a [`MonorepoDocs`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregatorState {
    /// No project added yet.
    Empty,
    /// At least one project added.
    Accumulating,
    /// `generate` has run; nothing more can be added.
    Generated,
}

/// Paths produced by [`MonorepoDocs::generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSite {
    /// Root `mkdocs.yml` of the combined site.
    pub config_file: PathBuf,
    /// Built static site.
    pub site_dir: PathBuf,
}

/// Collects documentation projects and builds them as one site.
#[derive(Debug)]
pub struct MonorepoDocs {
    root: PathBuf,
    site_name: String,
    projects: Vec<DocsProject>,
    names: HashSet<String>,
    generated: bool,
}

impl MonorepoDocs {
    /// Create an aggregator writing everything under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            site_name: "Monorepo Documentation".to_string(),
            projects: Vec::new(),
            names: HashSet::new(),
            generated: false,
        }
    }

    /// Set the `site_name` of the combined site.
    pub fn with_site_name(mut self, name: impl Into<String>) -> Self {
        self.site_name = name.into();
        self
    }

    /// Get the aggregator root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the projects added so far, in insertion order.
    pub fn projects(&self) -> &[DocsProject] {
        &self.projects
    }

    /// Get the current state.
    pub fn state(&self) -> AggregatorState {
        if self.generated {
            AggregatorState::Generated
        } else if self.projects.is_empty() {
            AggregatorState::Empty
        } else {
            AggregatorState::Accumulating
        }
    }

    /// Add a validated documentation project.
    ///
    /// # Errors
    ///
    /// Returns an error if `docs_path` is not a valid MkDocs project, if a
    /// project with the same name was already added, or if the site has
    /// already been generated.
    pub fn add_project(
        &mut self,
        docs_path: impl Into<PathBuf>,
        name: impl Into<String>,
    ) -> Result<()> {
        if self.generated {
            return Err(DocsError::AlreadyGenerated);
        }

        let project = DocsProject::new(docs_path, name);
        let validity = check_project(project.docs_path());
        if !validity.is_valid() {
            return Err(DocsError::InvalidProject {
                name: project.name,
                path: project.docs_path,
                validity,
            });
        }

        if !self.names.insert(project.name().to_string()) {
            return Err(DocsError::DuplicateProject {
                name: project.name().to_string(),
            });
        }

        debug!(
            project = project.name(),
            docs = %project.docs_path().display(),
            "project added"
        );
        self.projects.push(project);
        Ok(())
    }

    /// Lay out, build and present the combined site.
    ///
    /// With no projects the site still builds, containing only the landing page.
    ///
    /// # Errors
    ///
    /// Returns an error if called twice, if the sources cannot be written, or
    /// if the generator fails.
    pub fn generate<G: SiteGenerator + ?Sized>(
        &mut self,
        generator: &mut G,
    ) -> Result<GeneratedSite> {
        if self.generated {
            return Err(DocsError::AlreadyGenerated);
        }
        self.generated = true;

        info!(
            root = %self.root.display(),
            projects = self.projects.len(),
            "generating combined site"
        );

        let generated_at = Local::now().format("%Y-%m-%d %H:%M").to_string();
        let config_file =
            write_layout(&self.root, &self.site_name, &self.projects, &generated_at)?;
        let site_dir = self.root.join(SITE_DIR);

        generator.build(&config_file, &site_dir)?;
        generator.present(&config_file, &site_dir)?;

        Ok(GeneratedSite {
            config_file,
            site_dir,
        })
    }
}

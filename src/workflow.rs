//! The end-to-end run: install, discover, locate, aggregate.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::Config;
use crate::docs::{check_project, GeneratedSite, MonorepoDocs, ProjectValidity, SiteGenerator};
use crate::error::Result;
use crate::installer::{install_missing, InstallReport, PackageEnvironment};
use crate::package::{discover_packages, Package};
use crate::utils::{monorepo_root, output_dir};

/// Inputs of a run that do not come from the config file.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Directory the tool runs from; its parent is the monorepo root.
    pub tool_dir: PathBuf,
    /// Aggregator root override.
    pub output_dir: Option<PathBuf>,
    /// Skip the dependency installer.
    pub skip_install: bool,
}

impl RunOptions {
    /// Options for a tool directory with everything else defaulted.
    pub fn new(tool_dir: impl Into<PathBuf>) -> Self {
        Self {
            tool_dir: tool_dir.into(),
            output_dir: None,
            skip_install: false,
        }
    }

    /// Resolve the aggregator root from the CLI override or the config.
    pub fn resolved_output_dir(&self, config: &Config) -> PathBuf {
        let configured = self
            .output_dir
            .as_deref()
            .or(config.site.output_dir.as_deref());
        output_dir(&self.tool_dir, configured)
    }
}

/// What a completed run did.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Dependency installation outcome, if the installer ran.
    pub install: Option<InstallReport>,
    /// Every discovered package with its docs status.
    pub packages: Vec<(Package, ProjectValidity)>,
    /// Names of the projects included in the combined site.
    pub added: Vec<String>,
    /// Files produced by the generator.
    pub site: GeneratedSite,
}

/// Discover the packages next to the tool directory and classify their docs.
pub fn locate_projects(
    config: &Config,
    tool_dir: &Path,
) -> Result<Vec<(Package, ProjectValidity)>> {
    let root = monorepo_root(tool_dir);
    let packages = discover_packages(&root, &config.packages, Some(tool_dir))?;

    Ok(packages
        .into_iter()
        .map(|package| {
            let validity = check_project(&package.docs_dir());
            debug!(package = package.name(), %validity, "checked docs");
            (package, validity)
        })
        .collect())
}

/// Add every package with a valid docs project to the aggregator.
///
/// Packages without docs are skipped silently. Returns the added names.
pub fn add_valid_projects(
    docs: &mut MonorepoDocs,
    packages: &[(Package, ProjectValidity)],
) -> Result<Vec<String>> {
    let mut added = Vec::new();

    for (package, validity) in packages {
        if !validity.is_valid() {
            continue;
        }

        let docs_path = package.docs_dir();
        println!(
            "adding {} with docs path {}",
            package.name(),
            docs_path.display()
        );
        docs.add_project(docs_path, package.name())?;
        added.push(package.name().to_string());
    }

    Ok(added)
}

/// Run the whole workflow.
///
/// # Errors
///
/// Install, discovery and generator failures abort the run. A package
/// without usable docs never does.
pub fn run<E, G>(
    config: &Config,
    options: &RunOptions,
    env: &mut E,
    generator: &mut G,
) -> Result<RunSummary>
where
    E: PackageEnvironment,
    G: SiteGenerator,
{
    let install = if options.skip_install || !config.install.enabled {
        debug!("dependency installation skipped");
        None
    } else {
        Some(install_missing(env, &config.install.requirements)?)
    };

    let packages = locate_projects(config, &options.tool_dir)?;
    let names: Vec<&str> = packages.iter().map(|(p, _)| p.name()).collect();
    println!("Found {} packages: {}", names.len(), names.join(", "));

    let mut docs = MonorepoDocs::new(options.resolved_output_dir(config))
        .with_site_name(config.site.name.clone());
    let added = add_valid_projects(&mut docs, &packages)?;

    info!(
        root = %docs.root().display(),
        added = added.len(),
        "aggregating documentation"
    );
    println!("Combined docs directory: {}", docs.root().display());

    let site = docs.generate(generator)?;

    Ok(RunSummary {
        install,
        packages,
        added,
        site,
    })
}

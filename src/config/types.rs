//! Configuration type definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Packages the combined site cannot be built without.
pub const DEFAULT_REQUIREMENTS: &[&str] = &[
    "mkdocs",
    "mkdocs-material",
    "pymdown-extensions",
    "mkdocs-monorepo-plugin",
];

/// Default name of the aggregator root inside the tool directory.
pub const DEFAULT_OUTPUT_DIR: &str = "docs_all";

/// Default address for `mkdocs serve`.
pub const DEFAULT_DEV_ADDR: &str = "127.0.0.1:8000";

/// Build dependency installation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallConfig {
    /// Install missing requirements before building.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Python interpreter used to run pip.
    #[serde(default = "default_python")]
    pub python: String,
    /// pip distributions that must be present.
    #[serde(default = "default_requirements")]
    pub requirements: Vec<String>,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            python: default_python(),
            requirements: default_requirements(),
        }
    }
}

/// Package discovery settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackagesConfig {
    /// Explicit list of monorepo packages. Scanning is used when empty.
    #[serde(default)]
    pub members: Vec<String>,
    /// Directory name prefix that marks a monorepo package when scanning.
    #[serde(default)]
    pub namespace: String,
    /// Glob patterns for package names to leave out.
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Combined site settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// `site_name` of the combined site.
    #[serde(default = "default_site_name")]
    pub name: String,
    /// Aggregator root, relative to the tool directory unless absolute.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    /// Address passed to `mkdocs serve`.
    #[serde(default = "default_dev_addr")]
    pub dev_addr: String,
    /// Open a browser once the preview server starts.
    #[serde(default = "default_true")]
    pub open_browser: bool,
    /// mkdocs executable.
    #[serde(default = "default_mkdocs")]
    pub mkdocs: String,
    /// Extra arguments for every mkdocs invocation (shell syntax).
    #[serde(default)]
    pub extra_args: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            output_dir: None,
            dev_addr: default_dev_addr(),
            open_browser: true,
            mkdocs: default_mkdocs(),
            extra_args: None,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Dependency installation.
    #[serde(default)]
    pub install: InstallConfig,
    /// Package discovery.
    #[serde(default)]
    pub packages: PackagesConfig,
    /// Combined site.
    #[serde(default)]
    pub site: SiteConfig,
}

impl Config {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the user-level config file path.
    ///
    /// Returns `~/.config/monodocs/config.toml` on Unix-like systems.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("monodocs").join("config.toml"))
    }

    /// Apply a config file on top of this one.
    ///
    /// Only values the file sets override. `exclude` patterns accumulate.
    pub fn merge(&mut self, layer: ConfigLayer) {
        let ConfigLayer {
            install,
            packages,
            site,
        } = layer;

        set_if_some(&mut self.install.enabled, install.enabled);
        set_if_some(&mut self.install.python, install.python);
        set_if_some(&mut self.install.requirements, install.requirements);

        // Members replace rather than append so a project file can narrow the set
        set_if_some(&mut self.packages.members, packages.members);
        set_if_some(&mut self.packages.namespace, packages.namespace);
        self.packages.exclude.extend(packages.exclude);

        if site.output_dir.is_some() {
            self.site.output_dir = site.output_dir;
        }
        if site.extra_args.is_some() {
            self.site.extra_args = site.extra_args;
        }
        set_if_some(&mut self.site.name, site.name);
        set_if_some(&mut self.site.dev_addr, site.dev_addr);
        set_if_some(&mut self.site.open_browser, site.open_browser);
        set_if_some(&mut self.site.mkdocs, site.mkdocs);
    }

    /// Parsed `site.extra_args`, falling back to a single argument when the
    /// string is not valid shell syntax.
    pub fn mkdocs_extra_args(&self) -> Vec<String> {
        self.site
            .extra_args
            .as_deref()
            .map(|a| shell_words::split(a).unwrap_or_else(|_| vec![a.to_string()]))
            .unwrap_or_default()
    }
}

/// One config file as written: every setting is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigLayer {
    #[serde(default)]
    pub install: InstallLayer,
    #[serde(default)]
    pub packages: PackagesLayer,
    #[serde(default)]
    pub site: SiteLayer,
}

/// `[install]` as written in a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InstallLayer {
    pub enabled: Option<bool>,
    pub python: Option<String>,
    pub requirements: Option<Vec<String>>,
}

/// `[packages]` as written in a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PackagesLayer {
    pub members: Option<Vec<String>>,
    pub namespace: Option<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// `[site]` as written in a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SiteLayer {
    pub name: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub dev_addr: Option<String>,
    pub open_browser: Option<bool>,
    pub mkdocs: Option<String>,
    pub extra_args: Option<String>,
}

fn set_if_some<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

fn default_true() -> bool {
    true
}

fn default_python() -> String {
    "python3".to_string()
}

fn default_requirements() -> Vec<String> {
    DEFAULT_REQUIREMENTS.iter().map(|s| s.to_string()).collect()
}

fn default_site_name() -> String {
    "Monorepo Documentation".to_string()
}

fn default_dev_addr() -> String {
    DEFAULT_DEV_ADDR.to_string()
}

fn default_mkdocs() -> String {
    "mkdocs".to_string()
}

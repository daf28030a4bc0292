//! On-disk layout of the combined site sources.
//!
//! ```text
//! <root>/
//!   mkdocs.yml          root config including every project
//!   docs/index.md       landing page
//!   projects/<name>/    copy of each project's docs directory
//!   site/               build output
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;
use walkdir::WalkDir;

use super::aggregator::DocsProject;
use super::locator::{config_file, CONFIG_FILE_NAMES};
use crate::error::{DocsError, Result};

/// Root config file written by the aggregator.
pub const ROOT_CONFIG_FILE: &str = "mkdocs.yml";
/// Directory holding the landing page.
pub const INDEX_DIR: &str = "docs";
/// Directory holding the copied projects.
pub const PROJECTS_DIR: &str = "projects";
/// Build output directory.
pub const SITE_DIR: &str = "site";

/// Markdown extensions enabled on the combined site (from pymdown-extensions).
const MARKDOWN_EXTENSIONS: &[&str] = &[
    "admonition",
    "attr_list",
    "md_in_html",
    "toc",
    "pymdownx.details",
    "pymdownx.highlight",
    "pymdownx.inlinehilite",
    "pymdownx.superfences",
    "pymdownx.tabbed",
    "pymdownx.tasklist",
];

#[derive(Debug, Serialize)]
struct ThemeConfig {
    name: &'static str,
}

/// Root `mkdocs.yml` of the combined site.
#[derive(Debug, Serialize)]
struct RootConfig<'a> {
    site_name: &'a str,
    docs_dir: &'static str,
    site_dir: &'static str,
    theme: ThemeConfig,
    plugins: Vec<&'static str>,
    markdown_extensions: Vec<&'static str>,
    nav: Vec<BTreeMap<String, String>>,
}

/// Render the root config.
///
/// Each project becomes a nav section pointing at its copied config through
/// the monorepo plugin's `!include` syntax.
pub fn render_config(site_name: &str, projects: &[DocsProject]) -> Result<String> {
    let mut nav = Vec::with_capacity(projects.len() + 1);
    nav.push(nav_entry("Home", "index.md".to_string()));

    for project in projects {
        let config_name = config_file(project.docs_path())
            .and_then(|p| p.file_name().and_then(|n| n.to_str()).map(String::from))
            .unwrap_or_else(|| CONFIG_FILE_NAMES[0].to_string());

        nav.push(nav_entry(
            project.name(),
            format!("!include ./{PROJECTS_DIR}/{}/{config_name}", project.name()),
        ));
    }

    let config = RootConfig {
        site_name,
        docs_dir: INDEX_DIR,
        site_dir: SITE_DIR,
        theme: ThemeConfig { name: "material" },
        plugins: vec!["search", "monorepo"],
        markdown_extensions: MARKDOWN_EXTENSIONS.to_vec(),
        nav,
    };

    serde_yaml::to_string(&config).map_err(|e| {
        DocsError::io(
            "render",
            ROOT_CONFIG_FILE,
            io::Error::new(io::ErrorKind::InvalidData, e),
        )
    })
}

fn nav_entry(title: &str, target: String) -> BTreeMap<String, String> {
    let mut entry = BTreeMap::new();
    entry.insert(title.to_string(), target);
    entry
}

/// Render the landing page listing every project.
pub fn render_index(site_name: &str, projects: &[DocsProject], generated_at: &str) -> String {
    let mut page = format!("# {site_name}\n\n");

    if projects.is_empty() {
        page.push_str("No documentation projects were found in this repository.\n");
    } else {
        page.push_str("Documentation for the following packages:\n\n");
        for project in projects {
            page.push_str(&format!("- **{}**\n", project.name()));
        }
    }

    page.push_str(&format!("\n_Generated {generated_at}._\n"));
    page
}

/// Write the combined site sources under `root` and return the root config path.
///
/// Copies from an earlier run are replaced so removed packages disappear.
pub fn write_layout(
    root: &Path,
    site_name: &str,
    projects: &[DocsProject],
    generated_at: &str,
) -> Result<PathBuf> {
    let projects_dir = root.join(PROJECTS_DIR);
    if projects_dir.exists() {
        fs::remove_dir_all(&projects_dir)
            .map_err(|e| DocsError::io("remove directory", &projects_dir, e))?;
    }
    fs::create_dir_all(&projects_dir)
        .map_err(|e| DocsError::io("create directory", &projects_dir, e))?;

    for project in projects {
        let target = projects_dir.join(project.name());
        debug!(project = project.name(), target = %target.display(), "copying docs");
        copy_tree(project.docs_path(), &target)?;
    }

    let index_dir = root.join(INDEX_DIR);
    fs::create_dir_all(&index_dir).map_err(|e| DocsError::io("create directory", &index_dir, e))?;
    let index = index_dir.join("index.md");
    fs::write(&index, render_index(site_name, projects, generated_at))
        .map_err(|e| DocsError::io("write", &index, e))?;

    let config_path = root.join(ROOT_CONFIG_FILE);
    fs::write(&config_path, render_config(site_name, projects)?)
        .map_err(|e| DocsError::io("write", &config_path, e))?;

    Ok(config_path)
}

/// Recursively copy a project's docs directory, leaving out its own build output.
fn copy_tree(src: &Path, dst: &Path) -> Result<()> {
    let walker = WalkDir::new(src)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| !(e.depth() == 1 && e.file_type().is_dir() && e.file_name() == SITE_DIR));

    for entry in walker {
        let entry = entry.map_err(|e| DocsError::io("read", src, io::Error::from(e)))?;
        let relative = entry.path().strip_prefix(src).unwrap_or(entry.path());
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .map_err(|e| DocsError::io("create directory", &target, e))?;
        } else {
            fs::copy(entry.path(), &target).map_err(|e| DocsError::io("copy", entry.path(), e))?;
        }
    }

    Ok(())
}

//! Test fixtures for integration tests.
//!
//! Each fixture is a temporary monorepo root with a `tools` directory inside
//! it that plays the role of the tool directory.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Name of the tool directory inside every fixture.
pub const TOOL_DIR: &str = "tools";

/// What a fixture package carries.
#[derive(Debug, Clone, Copy)]
pub enum Docs {
    /// `docs/mkdocs.yml` plus a page.
    Valid,
    /// `docs/` without a config file.
    NoConfig,
    /// No `docs/` at all.
    None,
}

/// A temporary monorepo.
pub struct Monorepo {
    temp: TempDir,
}

impl Monorepo {
    /// Monorepo root.
    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    /// Tool directory.
    pub fn tool_dir(&self) -> PathBuf {
        self.temp.path().join(TOOL_DIR)
    }

    /// Default aggregator root.
    pub fn output_dir(&self) -> PathBuf {
        self.tool_dir().join("docs_all")
    }

    /// Write a `.monodocs.toml` into the tool directory.
    pub fn with_config(self, content: &str) -> Self {
        fs::write(self.tool_dir().join(".monodocs.toml"), content)
            .expect("Failed to write config");
        self
    }
}

/// Create a monorepo with the given packages.
pub fn create_monorepo(packages: &[(&str, Docs)]) -> Monorepo {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let root = temp.path();

    fs::create_dir_all(root.join(TOOL_DIR)).expect("Failed to create tool dir");

    for (name, docs) in packages {
        let pkg = root.join(name);
        fs::create_dir_all(&pkg).expect("Failed to create package dir");

        match docs {
            Docs::Valid => {
                let docs_dir = pkg.join("docs");
                fs::create_dir_all(docs_dir.join("docs")).expect("Failed to create docs dir");
                fs::write(docs_dir.join("mkdocs.yml"), format!("site_name: {name}\n"))
                    .expect("Failed to write mkdocs.yml");
                fs::write(
                    docs_dir.join("docs").join("index.md"),
                    format!("# {name}\n"),
                )
                .expect("Failed to write index.md");
            }
            Docs::NoConfig => {
                fs::create_dir_all(pkg.join("docs")).expect("Failed to create docs dir");
                fs::write(pkg.join("docs").join("notes.md"), "notes")
                    .expect("Failed to write notes");
            }
            Docs::None => {}
        }
    }

    Monorepo { temp }
}

/// Packages A (valid docs), B (docs without config) and C (no docs).
pub fn abc_monorepo() -> Monorepo {
    create_monorepo(&[("A", Docs::Valid), ("B", Docs::NoConfig), ("C", Docs::None)])
}

/// Monorepo with no packages besides the tool directory.
pub fn empty_monorepo() -> Monorepo {
    create_monorepo(&[])
}

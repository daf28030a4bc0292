//! Snapshot tests using insta.
//!
//! These tests capture the exact shape of user-facing output.

use assert_cmd::cargo::cargo_bin_cmd;

use crate::integration::fixtures::{abc_monorepo, create_monorepo, Docs};

#[test]
fn test_snapshot_list_output() {
    let repo = abc_monorepo();

    let output = cargo_bin_cmd!("monodocs")
        .env_remove("RUST_LOG")
        .args(["--no-config", "--list"])
        .arg(repo.tool_dir())
        .output()
        .expect("Failed to run monodocs");

    let stdout = String::from_utf8_lossy(&output.stdout);

    insta::assert_snapshot!(stdout, @r###"
    Packages (3):

      A  mkdocs project
      B  no mkdocs.yml
      C  no docs directory

    1 documentation projects found
    "###);
}

#[test]
fn test_snapshot_root_config() {
    let repo = create_monorepo(&[("core", Docs::Valid), ("render", Docs::Valid)]);

    let status = cargo_bin_cmd!("monodocs")
        .env_remove("RUST_LOG")
        .args(["--no-config", "--skip-install", "--dry-run", "--build-only"])
        .arg(repo.tool_dir())
        .output()
        .expect("Failed to run monodocs")
        .status;
    assert!(status.success());

    let config = std::fs::read_to_string(repo.output_dir().join("mkdocs.yml")).unwrap();

    insta::assert_snapshot!(config, @r###"
    site_name: Monorepo Documentation
    docs_dir: docs
    site_dir: site
    theme:
      name: material
    plugins:
    - search
    - monorepo
    markdown_extensions:
    - admonition
    - attr_list
    - md_in_html
    - toc
    - pymdownx.details
    - pymdownx.highlight
    - pymdownx.inlinehilite
    - pymdownx.superfences
    - pymdownx.tabbed
    - pymdownx.tasklist
    nav:
    - Home: index.md
    - core: '!include ./projects/core/mkdocs.yml'
    - render: '!include ./projects/render/mkdocs.yml'
    "###);
}

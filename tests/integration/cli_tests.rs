//! CLI integration tests for monodocs.
//!
//! These tests verify the command-line interface behavior using assert_cmd.
//! Runs use `--dry-run` or `--skip-install --build-only` with a bogus mkdocs
//! so no Python toolchain is needed.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

use crate::integration::fixtures::{abc_monorepo, create_monorepo, empty_monorepo, Docs};

/// Get a Command for the monodocs binary.
fn monodocs() -> Command {
    let mut cmd = cargo_bin_cmd!("monodocs");
    cmd.env_remove("RUST_LOG");
    cmd
}

// ==================== Help and Version ====================

#[test]
fn test_help_output() {
    monodocs()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Aggregate the MkDocs projects of a monorepo",
        ))
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--skip-install"))
        .stdout(predicate::str::contains("--build-only"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn test_version_output() {
    monodocs()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("monodocs"))
        .stdout(predicate::str::is_match(r"\d+\.\d+\.\d+").unwrap());
}

#[test]
fn test_completions_bash() {
    monodocs()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("monodocs"));
}

#[test]
fn test_example_config() {
    let output = monodocs().arg("--example-config").output().unwrap();
    assert!(output.status.success());

    let text = String::from_utf8_lossy(&output.stdout);
    let config: monodocs::Config = toml::from_str(&text).expect("example config should parse");
    assert_eq!(config, monodocs::Config::default());
}

// ==================== Dry Run ====================

#[test]
fn test_dry_run_adds_only_valid_projects() {
    let repo = abc_monorepo();

    monodocs()
        .args(["--no-config", "--skip-install", "--dry-run"])
        .arg(repo.tool_dir())
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 3 packages: A, B, C"))
        .stdout(predicate::str::contains("adding A with docs path"))
        .stdout(predicate::str::contains("adding B").not())
        .stdout(predicate::str::contains("adding C").not())
        .stdout(predicate::str::contains("Would run: mkdocs build -f"))
        .stdout(predicate::str::contains("Would run: mkdocs serve -f"))
        .stdout(predicate::str::contains("Would open: http://127.0.0.1:8000/"))
        .stdout(predicate::str::contains("Added 1 of 3 packages: A"));

    let config = std::fs::read_to_string(repo.output_dir().join("mkdocs.yml")).unwrap();
    assert!(config.contains("!include ./projects/A/mkdocs.yml"));
    assert!(!config.contains("projects/B"));
    assert!(repo.output_dir().join("projects/A/docs/index.md").is_file());
}

#[test]
fn test_dry_run_installs_every_requirement() {
    let repo = empty_monorepo();

    monodocs()
        .args(["--no-config", "--dry-run", "--build-only"])
        .arg(repo.tool_dir())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Would run: python3 -m pip list --format=json",
        ))
        .stdout(predicate::str::contains(
            "Would run: python3 -m pip install mkdocs\n",
        ))
        .stdout(predicate::str::contains(
            "Would run: python3 -m pip install mkdocs-material",
        ))
        .stdout(predicate::str::contains(
            "Would run: python3 -m pip install pymdown-extensions",
        ))
        .stdout(predicate::str::contains(
            "Would run: python3 -m pip install mkdocs-monorepo-plugin",
        ));
}

#[test]
fn test_zero_packages_builds_minimal_site() {
    let repo = empty_monorepo();

    monodocs()
        .args(["--no-config", "--skip-install", "--dry-run", "--build-only"])
        .arg(repo.tool_dir())
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 0 packages"))
        .stdout(predicate::str::contains("Added 0 of 0 packages"));

    assert!(repo.output_dir().join("mkdocs.yml").is_file());
    assert!(repo.output_dir().join("docs/index.md").is_file());
}

#[test]
fn test_output_flag() {
    let repo = abc_monorepo();
    let out = repo.root().join("site_sources");

    monodocs()
        .args(["--no-config", "--skip-install", "--dry-run", "--build-only"])
        .arg("--output")
        .arg(&out)
        .arg(repo.tool_dir())
        .assert()
        .success();

    assert!(out.join("mkdocs.yml").is_file());
    assert!(!repo.output_dir().exists());
}

#[test]
fn test_dev_addr_flag() {
    let repo = empty_monorepo();

    monodocs()
        .args([
            "--no-config",
            "--skip-install",
            "--dry-run",
            "--no-browser",
            "-a",
            "0.0.0.0:9001",
        ])
        .arg(repo.tool_dir())
        .assert()
        .success()
        .stdout(predicate::str::contains("-a 0.0.0.0:9001"))
        .stdout(predicate::str::contains("Would open").not());
}

#[test]
fn test_runs_from_current_directory() {
    let repo = create_monorepo(&[("core", Docs::Valid)]);

    monodocs()
        .args(["--no-config", "--skip-install", "--dry-run", "--build-only"])
        .current_dir(repo.tool_dir())
        .assert()
        .success()
        .stdout(predicate::str::contains("adding core with docs path"));
}

// ==================== List Mode ====================

#[test]
fn test_list_mode() {
    let repo = abc_monorepo();

    monodocs()
        .args(["--no-config", "--list"])
        .arg(repo.tool_dir())
        .assert()
        .success()
        .stdout(predicate::str::contains("Packages (3):"))
        .stdout(predicate::str::contains("mkdocs project"))
        .stdout(predicate::str::contains("no mkdocs.yml"))
        .stdout(predicate::str::contains("no docs directory"))
        .stdout(predicate::str::contains("1 documentation projects found"));

    // Listing never writes the combined site
    assert!(!repo.output_dir().exists());
}

// ==================== Errors ====================

#[test]
fn test_missing_tool_dir() {
    monodocs()
        .args(["--no-config", "--list", "/definitely/not/a/real/dir"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to find tool directory"));
}

#[test]
fn test_generator_failure_exit_code() {
    let repo = abc_monorepo().with_config(
        r#"
[site]
mkdocs = "definitely-not-mkdocs-executable"
"#,
    );

    monodocs()
        .args(["--skip-install", "--build-only"])
        .arg(repo.tool_dir())
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("definitely-not-mkdocs-executable build"));
}

#[test]
fn test_install_failure_exit_code() {
    let repo = empty_monorepo().with_config(
        r#"
[install]
python = "definitely-not-a-python-interpreter"
"#,
    );

    monodocs()
        .arg("--build-only")
        .arg(repo.tool_dir())
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("pip list"));

    // Nothing was laid out before the installer gave up
    assert!(!repo.output_dir().exists());
}

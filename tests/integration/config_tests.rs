//! Configuration tests through the binary.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

use crate::integration::fixtures::{abc_monorepo, create_monorepo, Docs};

fn monodocs() -> Command {
    let mut cmd = cargo_bin_cmd!("monodocs");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_project_config_members() {
    let repo = create_monorepo(&[
        ("core", Docs::Valid),
        ("render", Docs::Valid),
        ("net", Docs::Valid),
    ])
    .with_config(
        r#"
[packages]
members = ["render", "core"]
"#,
    );

    monodocs()
        .args(["--skip-install", "--dry-run", "--build-only"])
        .arg(repo.tool_dir())
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 packages: render, core"))
        .stdout(predicate::str::contains("adding net").not());

    let config = std::fs::read_to_string(repo.output_dir().join("mkdocs.yml")).unwrap();
    let render = config.find("projects/render").unwrap();
    let core = config.find("projects/core").unwrap();
    assert!(render < core, "nav should follow manifest order");
}

#[test]
fn test_project_config_namespace_and_exclude() {
    let repo = create_monorepo(&[
        ("vm_core", Docs::Valid),
        ("vm_legacy", Docs::Valid),
        ("other", Docs::Valid),
    ])
    .with_config(
        r#"
[packages]
namespace = "vm_"
exclude = ["*legacy*"]
"#,
    );

    monodocs()
        .args(["--skip-install", "--dry-run", "--build-only"])
        .arg(repo.tool_dir())
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 packages: vm_core"));
}

#[test]
fn test_site_name_from_config() {
    let repo = abc_monorepo().with_config(
        r#"
[site]
name = "Engine Handbook"
extra_args = "--strict"
"#,
    );

    monodocs()
        .args(["--skip-install", "--dry-run", "--build-only"])
        .arg(repo.tool_dir())
        .assert()
        .success()
        .stdout(predicate::str::contains("--strict"));

    let config = std::fs::read_to_string(repo.output_dir().join("mkdocs.yml")).unwrap();
    assert!(config.contains("site_name: Engine Handbook"));
}

#[test]
fn test_no_config_ignores_project_file() {
    let repo = abc_monorepo().with_config(
        r#"
[packages]
members = ["C"]
"#,
    );

    monodocs()
        .args(["--no-config", "--skip-install", "--dry-run", "--build-only"])
        .arg(repo.tool_dir())
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 3 packages"));
}

#[test]
fn test_invalid_cli_config_exit_code() {
    let repo = abc_monorepo();
    let bad = repo.root().join("bad.toml");
    std::fs::write(&bad, "[[[ not toml").unwrap();

    monodocs()
        .args(["--skip-install", "--list", "--config"])
        .arg(&bad)
        .arg(repo.tool_dir())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid config"));
}

#[test]
fn test_invalid_project_config_warns() {
    let repo = abc_monorepo().with_config("[[[ not toml");

    monodocs()
        .arg("--list")
        .arg(repo.tool_dir())
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning: Failed to load project config"));
}

#[test]
fn test_invalid_exclude_pattern_exit_code() {
    let repo = abc_monorepo().with_config(
        r#"
[packages]
exclude = ["["]
"#,
    );

    monodocs()
        .arg("--list")
        .arg(repo.tool_dir())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid exclude pattern"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_project_config_layers_over_user_config() {
    let xdg = tempfile::TempDir::new().unwrap();
    let user_dir = xdg.path().join("monodocs");
    std::fs::create_dir_all(&user_dir).unwrap();
    std::fs::write(
        user_dir.join("config.toml"),
        r#"
[install]
python = "/opt/py/bin/python"

[site]
name = "Engine"
"#,
    )
    .unwrap();

    let repo = abc_monorepo().with_config(
        r#"
[packages]
members = ["A"]
"#,
    );

    monodocs()
        .env("XDG_CONFIG_HOME", xdg.path())
        .args(["--dry-run", "--build-only"])
        .arg(repo.tool_dir())
        .assert()
        .success()
        .stdout(predicate::str::contains("Would run: /opt/py/bin/python -m pip list"))
        .stdout(predicate::str::contains("Found 1 packages: A"));

    let config = std::fs::read_to_string(repo.output_dir().join("mkdocs.yml")).unwrap();
    assert!(config.contains("site_name: Engine"));
}

#[test]
fn test_member_outside_monorepo_rejected() {
    let repo = abc_monorepo().with_config(
        r#"
[packages]
members = ["A", "../outside"]
"#,
    );

    monodocs()
        .args(["--skip-install", "--dry-run", "--build-only"])
        .arg(repo.tool_dir())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("'../outside'"));

    assert!(!repo.output_dir().exists());
}

//! pip-backed package environment.

use std::process::{Command, Stdio};

use serde::Deserialize;
use tracing::debug;

use super::PackageEnvironment;
use crate::error::{DocsError, Result};

/// One entry of `pip list --format=json`.
#[derive(Debug, Deserialize)]
struct PipListEntry {
    name: String,
}

/// The Python environment of an interpreter, managed through `python -m pip`.
#[derive(Debug, Clone)]
pub struct Pip {
    python: String,
    dry_run: bool,
}

impl Pip {
    /// Create a pip environment for the given interpreter.
    pub fn new(python: impl Into<String>, dry_run: bool) -> Self {
        Self {
            python: python.into(),
            dry_run,
        }
    }

    /// Get the interpreter.
    pub fn python(&self) -> &str {
        &self.python
    }

    /// Command listing installed distributions as JSON.
    ///
    /// # Examples
    ///
    /// ```
    /// use monodocs::installer::Pip;
    ///
    /// let pip = Pip::new("python3", false);
    /// assert_eq!(
    ///     pip.list_command(),
    ///     vec!["python3", "-m", "pip", "list", "--format=json"]
    /// );
    /// ```
    pub fn list_command(&self) -> Vec<String> {
        vec![
            self.python.clone(),
            "-m".into(),
            "pip".into(),
            "list".into(),
            "--format=json".into(),
        ]
    }

    /// Command installing a single distribution.
    ///
    /// # Examples
    ///
    /// ```
    /// use monodocs::installer::Pip;
    ///
    /// let pip = Pip::new("python3", false);
    /// assert_eq!(
    ///     pip.install_command("mkdocs").join(" "),
    ///     "python3 -m pip install mkdocs"
    /// );
    /// ```
    pub fn install_command(&self, package: &str) -> Vec<String> {
        vec![
            self.python.clone(),
            "-m".into(),
            "pip".into(),
            "install".into(),
            package.into(),
        ]
    }
}

impl PackageEnvironment for Pip {
    fn installed(&self) -> Result<Vec<String>> {
        let cmd_parts = self.list_command();
        let command_str = cmd_parts.join(" ");

        if self.dry_run {
            println!("Would run: {command_str}");
            return Ok(Vec::new());
        }

        debug!(command = %command_str, "listing installed packages");

        let output = Command::new(&cmd_parts[0])
            .args(&cmd_parts[1..])
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| DocsError::EnvironmentQuery {
                python: self.python.clone(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(DocsError::EnvironmentQuery {
                python: self.python.clone(),
                message: format!("pip exited with {}", output.status),
            });
        }

        parse_pip_list(&String::from_utf8_lossy(&output.stdout)).map_err(|e| {
            DocsError::EnvironmentQuery {
                python: self.python.clone(),
                message: format!("unexpected pip output: {e}"),
            }
        })
    }

    fn install(&mut self, package: &str) -> Result<()> {
        let cmd_parts = self.install_command(package);
        let command_str = cmd_parts.join(" ");

        if self.dry_run {
            println!("Would run: {command_str}");
            return Ok(());
        }

        debug!(command = %command_str, "installing package");

        let status = Command::new(&cmd_parts[0])
            .args(&cmd_parts[1..])
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| DocsError::InstallFailed {
                package: package.to_string(),
                status: format!("could not run '{command_str}': {e}"),
            })?;

        if !status.success() {
            return Err(DocsError::install_failed(package, status));
        }

        Ok(())
    }
}

/// Extract distribution names from `pip list --format=json` output.
fn parse_pip_list(json: &str) -> serde_json::Result<Vec<String>> {
    let entries: Vec<PipListEntry> = serde_json::from_str(json)?;
    Ok(entries.into_iter().map(|e| e.name).collect())
}

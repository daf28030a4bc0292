//! Build dependency installation.
//!
//! Makes sure the Python packages the combined site needs are present,
//! installing only the ones that are missing.

mod pip;

use tracing::{debug, info};

use crate::error::Result;

pub use pip::Pip;

/// A set of installed packages that can be extended.
pub trait PackageEnvironment {
    /// Names of the packages currently installed.
    fn installed(&self) -> Result<Vec<String>>;

    /// Install one package. A failure is final; callers do not retry.
    fn install(&mut self, package: &str) -> Result<()>;
}

/// Outcome of [`install_missing`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    /// Requirements that were already installed.
    pub present: Vec<String>,
    /// Requirements installed by this run, in declared order.
    pub installed: Vec<String>,
}

/// Normalize a distribution name for comparison.
///
/// pip treats `Foo_Bar`, `foo.bar` and `foo-bar` as the same project.
///
/// # Examples
///
/// ```
/// use monodocs::installer::normalize_name;
///
/// assert_eq!(normalize_name("PyMdown_Extensions"), "pymdown-extensions");
/// assert_eq!(normalize_name("zope.interface"), "zope-interface");
/// ```
pub fn normalize_name(name: &str) -> String {
    let mut normalized = String::with_capacity(name.len());
    let mut last_was_sep = false;

    for c in name.trim().chars() {
        if matches!(c, '-' | '_' | '.') {
            if !last_was_sep {
                normalized.push('-');
            }
            last_was_sep = true;
        } else {
            normalized.extend(c.to_lowercase());
            last_was_sep = false;
        }
    }

    normalized
}

/// Requirements absent from `installed`, in declared order, without repeats.
pub fn missing_requirements(required: &[String], installed: &[String]) -> Vec<String> {
    let installed: std::collections::HashSet<String> =
        installed.iter().map(|n| normalize_name(n)).collect();
    let mut seen = std::collections::HashSet::new();

    required
        .iter()
        .filter(|r| {
            let key = normalize_name(r);
            !installed.contains(&key) && seen.insert(key)
        })
        .cloned()
        .collect()
}

/// Install every requirement missing from the environment.
///
/// Each missing package gets exactly one install attempt. The first failure
/// aborts and is returned; packages already present are left untouched.
///
/// # Errors
///
/// Returns an error if the installed set cannot be listed or an install fails.
pub fn install_missing<E: PackageEnvironment>(
    env: &mut E,
    required: &[String],
) -> Result<InstallReport> {
    let installed = env.installed()?;
    let missing = missing_requirements(required, &installed);

    let installed: std::collections::HashSet<String> =
        installed.iter().map(|n| normalize_name(n)).collect();
    let present: Vec<String> = required
        .iter()
        .filter(|r| installed.contains(&normalize_name(r)))
        .cloned()
        .collect();

    debug!(?present, ?missing, "checked build dependencies");

    for package in &missing {
        println!("Installing {package}...");
        env.install(package)?;
        info!(%package, "installed");
    }

    Ok(InstallReport {
        present,
        installed: missing,
    })
}

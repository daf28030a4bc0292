//! Custom error types for monodocs.
//!
//! Uses thiserror for ergonomic error definitions.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

use crate::docs::ProjectValidity;

/// Exit codes for monodocs.
pub mod exit_code {
    /// Success.
    pub const SUCCESS: i32 = 0;
    /// General error.
    pub const GENERAL_ERROR: i32 = 1;
    /// Invalid configuration.
    pub const INVALID_CONFIG: i32 = 2;
    /// A build dependency could not be installed.
    pub const INSTALL_FAILED: i32 = 3;
    /// The monorepo could not be scanned for packages.
    pub const DISCOVERY_FAILED: i32 = 4;
    /// mkdocs failed to build or serve the combined site.
    pub const GENERATOR_FAILED: i32 = 5;
    /// Interrupted (Ctrl+C).
    pub const INTERRUPTED: i32 = 130;
}

/// Main error type for monodocs.
#[derive(Error, Debug)]
pub enum DocsError {
    /// Configuration error.
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Invalid configuration file.
    #[error("Invalid config at {path}:\n  {message}\n\nTip: Check the config file syntax and ensure all values are valid.")]
    InvalidConfig { path: PathBuf, message: String },

    /// Listing the installed Python packages failed.
    #[error("Could not list installed packages with '{python} -m pip list': {message}\n\nTip: Make sure Python and pip are installed, or set [install] python in your config.")]
    EnvironmentQuery { python: String, message: String },

    /// Installing a build dependency failed.
    #[error("Failed to install '{package}' ({status})")]
    InstallFailed { package: String, status: String },

    /// The monorepo root could not be read.
    #[error("Failed to scan monorepo root '{path}': {source}")]
    DiscoveryFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Two documentation projects share a name.
    #[error("Documentation project '{name}' was already added\n\nTip: Project names must be unique; check [packages] members for duplicates.")]
    DuplicateProject { name: String },

    /// A directory that is not a buildable MkDocs project was added.
    #[error("Cannot add documentation project '{name}' from '{path}': {validity}")]
    InvalidProject {
        name: String,
        path: PathBuf,
        validity: ProjectValidity,
    },

    /// The aggregator has already produced its site.
    #[error("The combined site has already been generated for this run")]
    AlreadyGenerated,

    /// mkdocs exited unsuccessfully.
    #[error("'{command}' failed ({status})")]
    GeneratorFailed { command: String, status: String },

    /// IO error with path context.
    #[error("Failed to {operation} '{path}': {source}")]
    IoWithContext {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DocsError {
    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            DocsError::ConfigError { .. } => exit_code::INVALID_CONFIG,
            DocsError::InvalidConfig { .. } => exit_code::INVALID_CONFIG,
            DocsError::EnvironmentQuery { .. } => exit_code::INSTALL_FAILED,
            DocsError::InstallFailed { .. } => exit_code::INSTALL_FAILED,
            DocsError::DiscoveryFailed { .. } => exit_code::DISCOVERY_FAILED,
            DocsError::DuplicateProject { .. } => exit_code::GENERAL_ERROR,
            DocsError::InvalidProject { .. } => exit_code::GENERAL_ERROR,
            DocsError::AlreadyGenerated => exit_code::GENERAL_ERROR,
            DocsError::GeneratorFailed { status, .. } if status == INTERRUPTED_STATUS => {
                exit_code::INTERRUPTED
            }
            DocsError::GeneratorFailed { .. } => exit_code::GENERATOR_FAILED,
            DocsError::IoWithContext { .. } => exit_code::GENERAL_ERROR,
            DocsError::Io(_) => exit_code::GENERAL_ERROR,
        }
    }

    /// Create an install failure from the pip exit status.
    pub fn install_failed(package: &str, status: ExitStatus) -> Self {
        DocsError::InstallFailed {
            package: package.to_string(),
            status: describe_status(status),
        }
    }

    /// Create a generator failure from the mkdocs exit status.
    pub fn generator_failed(command: impl Into<String>, status: ExitStatus) -> Self {
        DocsError::GeneratorFailed {
            command: command.into(),
            status: describe_status(status),
        }
    }

    /// Wrap an IO error with the operation and path it happened on.
    pub fn io(operation: &str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DocsError::IoWithContext {
            operation: operation.to_string(),
            path: path.into(),
            source,
        }
    }
}

const INTERRUPTED_STATUS: &str = "interrupted";

/// Describe a process exit status for error messages.
fn describe_status(status: ExitStatus) -> String {
    match status.code() {
        Some(code) if code == exit_code::INTERRUPTED => INTERRUPTED_STATUS.to_string(),
        Some(code) => format!("exit code {code}"),
        None => describe_signal(status),
    }
}

#[cfg(unix)]
fn describe_signal(status: ExitStatus) -> String {
    use std::os::unix::process::ExitStatusExt;

    const SIGINT: i32 = 2;

    match status.signal() {
        Some(SIGINT) => INTERRUPTED_STATUS.to_string(),
        Some(signal) => format!("killed by signal {signal}"),
        None => "terminated".to_string(),
    }
}

#[cfg(not(unix))]
fn describe_signal(_status: ExitStatus) -> String {
    "terminated".to_string()
}

/// Result type alias for monodocs operations.
pub type Result<T> = std::result::Result<T, DocsError>;

//! CLI argument definitions for monodocs.
//!
//! Uses clap with derive macros for argument parsing.
//!
//! # Example
//!
//! ```no_run
//! use monodocs::cli::Cli;
//!
//! let cli = Cli::parse_args();
//! println!("Tool dir: {:?}", cli.tool_dir());
//! ```

use std::path::PathBuf;

use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::{generate, Shell};

use crate::config::Config;
use crate::docs::Presentation;

/// Aggregate the MkDocs projects of a monorepo into one documentation site.
#[derive(Parser, Debug)]
#[command(name = "monodocs")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Tool directory; packages are looked up next to it (default: current directory)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Directory for the combined site (default: PATH/docs_all)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Ignore config files
    #[arg(long)]
    pub no_config: bool,

    /// Do not install missing build dependencies
    #[arg(long)]
    pub skip_install: bool,

    /// Build the site without starting the preview server
    #[arg(short, long)]
    pub build_only: bool,

    /// Do not open a browser for the preview
    #[arg(long)]
    pub no_browser: bool,

    /// Address for the preview server
    #[arg(short = 'a', long, value_name = "ADDR")]
    pub dev_addr: Option<String>,

    /// List packages and their docs status, then exit
    #[arg(short, long)]
    pub list: bool,

    /// Show external commands without executing them
    #[arg(short, long)]
    pub dry_run: bool,

    /// Print an example config file and exit
    #[arg(long)]
    pub example_config: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Generate shell completions
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completions: Option<CliShell>,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CliShell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    Powershell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Get the tool directory.
    ///
    /// Returns the provided path or the current directory.
    pub fn tool_dir(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }

    /// How the built site is shown, combining flags with the config.
    pub fn presentation(&self, config: &Config) -> Presentation {
        if self.build_only {
            return Presentation::BuildOnly;
        }

        Presentation::Serve {
            dev_addr: self
                .dev_addr
                .clone()
                .unwrap_or_else(|| config.site.dev_addr.clone()),
            open_browser: config.site.open_browser && !self.no_browser,
        }
    }

    /// Generate shell completions and write to stdout.
    pub fn generate_completions(shell: CliShell) {
        let mut cmd = Cli::command();
        let shell = match shell {
            CliShell::Bash => Shell::Bash,
            CliShell::Zsh => Shell::Zsh,
            CliShell::Fish => Shell::Fish,
            CliShell::Powershell => Shell::PowerShell,
            CliShell::Elvish => Shell::Elvish,
        };
        generate(shell, &mut cmd, "monodocs", &mut std::io::stdout());
    }
}

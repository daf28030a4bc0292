//! Build script for monodocs.
//!
//! Generates man pages using clap_mangen.

use std::env;
use std::fs;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, ValueEnum};

/// Minimal CLI struct for man page generation.
///
/// This duplicates the CLI definition to avoid build dependency issues.
#[derive(Parser)]
#[command(name = "monodocs")]
#[command(
    author,
    version,
    about = "Aggregate the MkDocs projects of a monorepo into one documentation site"
)]
#[command(
    long_about = "monodocs installs the MkDocs toolchain when it is missing, finds every \
    package next to the tool directory that carries a docs/mkdocs.yml, and builds them into \
    a single site with mkdocs-monorepo-plugin.\n\n\
    Run without arguments from the tool directory to build and preview the combined site."
)]
struct Cli {
    /// Tool directory; packages are looked up next to it (default: current directory)
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Directory for the combined site (default: PATH/docs_all)
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Ignore config files
    #[arg(long)]
    no_config: bool,

    /// Do not install missing build dependencies
    #[arg(long)]
    skip_install: bool,

    /// Build the site without starting the preview server
    #[arg(short, long)]
    build_only: bool,

    /// Do not open a browser for the preview
    #[arg(long)]
    no_browser: bool,

    /// Address for the preview server
    #[arg(short = 'a', long, value_name = "ADDR")]
    dev_addr: Option<String>,

    /// List packages and their docs status, then exit
    #[arg(short, long)]
    list: bool,

    /// Show external commands without executing them
    #[arg(short, long)]
    dry_run: bool,

    /// Print an example config file and exit
    #[arg(long)]
    example_config: bool,

    /// Enable debug output
    #[arg(long)]
    debug: bool,

    /// Generate shell completions
    #[arg(long, value_name = "SHELL", value_enum)]
    completions: Option<Shell>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
    Elvish,
}

fn main() {
    // Only generate man pages for release builds or when explicitly requested
    let profile = env::var("PROFILE").unwrap_or_default();
    if profile != "release" && env::var("MONODOCS_GEN_MANPAGE").is_err() {
        return;
    }

    let out_dir = match env::var_os("OUT_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => return,
    };

    let cmd = Cli::command();
    let man = clap_mangen::Man::new(cmd);

    let mut buffer = Vec::new();
    man.render(&mut buffer)
        .expect("Failed to generate man page");

    let man_path = out_dir.join("monodocs.1");
    fs::write(&man_path, buffer).expect("Failed to write man page");

    println!("cargo:rerun-if-changed=build.rs");
}

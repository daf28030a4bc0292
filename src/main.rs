//! monodocs - monorepo documentation aggregator
//!
//! Entry point for the monodocs CLI application.

use std::io::{self, IsTerminal};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use monodocs::cli::Cli;
use monodocs::config::{generate_example_config, load_config, Config};
use monodocs::docs::{MkDocs, ProjectValidity};
use monodocs::error::{exit_code, DocsError};
use monodocs::installer::Pip;
use monodocs::utils::{local_config_file, resolve_tool_dir};
use monodocs::workflow::{self, locate_projects, RunOptions};

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(err) => {
            if let Some(docs_err) = err.downcast_ref::<DocsError>() {
                eprintln!("Error: {docs_err}");
                return ExitCode::from(docs_err.exit_code() as u8);
            }
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code::GENERAL_ERROR as u8)
        }
    }
}

fn init_logging(debug: bool) {
    let filter = if debug { "debug" } else { "warn" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run() -> Result<i32> {
    let cli = Cli::parse_args();

    // Handle shell completions early
    if let Some(shell) = cli.completions {
        Cli::generate_completions(shell);
        return Ok(exit_code::SUCCESS);
    }

    if cli.example_config {
        print!("{}", generate_example_config());
        return Ok(exit_code::SUCCESS);
    }

    init_logging(cli.debug);

    if cli.debug {
        print_debug_header();
        eprintln!("Debug: CLI arguments = {cli:#?}");
    }

    let tool_dir = resolve_tool_dir(&cli.tool_dir()).context("Failed to find tool directory")?;

    let config = if cli.no_config {
        Config::default()
    } else {
        load_config(cli.config.as_deref(), &tool_dir)?
    };

    if cli.debug {
        print_debug_paths(&tool_dir);
        eprintln!("Debug: Config = {config:#?}");
    }

    if cli.list {
        return list_packages(&config, &tool_dir);
    }

    let options = RunOptions {
        tool_dir,
        output_dir: cli.output.clone(),
        skip_install: cli.skip_install,
    };

    let mut env = Pip::new(config.install.python.clone(), cli.dry_run);
    let mut generator = MkDocs::new(config.site.mkdocs.clone())
        .with_extra_args(config.mkdocs_extra_args())
        .with_presentation(cli.presentation(&config))
        .dry_run(cli.dry_run);

    let summary = workflow::run(&config, &options, &mut env, &mut generator)?;

    if let Some(install) = &summary.install {
        if !install.installed.is_empty() {
            eprintln!("Installed: {}", install.installed.join(", "));
        }
    }
    println!(
        "Added {} of {} packages: {}",
        summary.added.len(),
        summary.packages.len(),
        summary.added.join(", ")
    );

    Ok(exit_code::SUCCESS)
}

/// List packages with their docs status (no build).
fn list_packages(config: &Config, tool_dir: &Path) -> Result<i32> {
    let use_colors = io::stdout().is_terminal();
    let packages = locate_projects(config, tool_dir)?;

    if use_colors {
        println!("\x1b[1;36mPackages ({}):\x1b[0m", packages.len());
    } else {
        println!("Packages ({}):", packages.len());
    }
    println!();

    let max_name_len = packages
        .iter()
        .map(|(p, _)| p.name().len())
        .max()
        .unwrap_or(0)
        .min(30);

    for (package, validity) in &packages {
        if use_colors {
            let color = match validity {
                ProjectValidity::Valid => "1;32",
                ProjectValidity::MissingConfig => "33",
                ProjectValidity::MissingDirectory => "2",
            };
            println!(
                "  \x1b[{color}m{:width$}\x1b[0m  {}",
                package.name(),
                validity,
                width = max_name_len
            );
        } else {
            println!(
                "  {:width$}  {}",
                package.name(),
                validity,
                width = max_name_len
            );
        }
    }

    let valid = packages.iter().filter(|(_, v)| v.is_valid()).count();
    println!();
    println!("{valid} documentation projects found");

    Ok(exit_code::SUCCESS)
}

// ==================== Debug Functions ====================

/// Print debug header with version info.
fn print_debug_header() {
    eprintln!("=== monodocs debug mode ===");
    eprintln!("Version: {}", env!("CARGO_PKG_VERSION"));
    eprintln!();
}

/// Print debug information about file paths.
fn print_debug_paths(tool_dir: &Path) {
    eprintln!("Debug: File locations:");
    eprintln!("  Tool directory: {}", tool_dir.display());

    if let Some(cfg) = Config::user_config_path() {
        eprintln!("  Global config: {} (exists: {})", cfg.display(), cfg.exists());
    } else {
        eprintln!("  Global config: <not available>");
    }

    if let Some(cfg) = local_config_file(tool_dir) {
        eprintln!("  Local config: {} (exists: true)", cfg.display());
    } else {
        eprintln!(
            "  Local config: {}/.monodocs.toml (exists: false)",
            tool_dir.display()
        );
    }

    eprintln!();
}

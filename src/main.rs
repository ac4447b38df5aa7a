//! Einstein Coder project tools - Main entry point
//!
//! A small command-line utility around the project file inventory reporter
//! and the runtime scratch directory scaffolding.

mod cli;
mod config;
mod error;
mod manifest;
mod report;
mod runtime;

use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::config::ProjectConfig;
use crate::manifest::ProjectManifest;

/// Initialize the tracing subscriber with appropriate settings
fn init_logger() {
    tracing_subscriber::fmt()
        .with_env_filter(
            // RUST_LOG overrides the default info level
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// Load the project configuration from an optional path, defaulting when
/// no file is given
fn load_config(path: Option<&std::path::Path>) -> Result<ProjectConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let config = ProjectConfig::load_from_file(path)?;
            config.validate()?;
            Ok(config)
        }
        None => Ok(ProjectConfig::default()),
    }
}

/// Main application entry point
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging first
    init_logger();
    info!("Einstein Coder tools starting up");

    let cli = Cli::parse_args();
    debug!("CLI arguments parsed");

    // Root resolution happens exactly once, here; library operations take
    // the root as an explicit parameter.
    let root = config::resolve_project_root(cli.root.clone());
    debug!("Project root resolved to {}", root.display());

    match cli.command {
        Some(Commands::Report) | None => {
            report::update_project_file_list(&root)?;
        }
        Some(Commands::Manifest) => {
            for entry in ProjectManifest::expected().entries() {
                println!("{}", entry);
            }
        }
        Some(Commands::Scaffold { config }) => {
            let config = load_config(config.as_deref())?;
            runtime::setup_runtime_directories(&config.runtime)?;
        }
        Some(Commands::Cleanup { config, confirm }) => {
            if !confirm {
                eprintln!("✗ Cleanup deletes the runtime scratch tree; re-run with --confirm");
                std::process::exit(1);
            }
            let config = load_config(config.as_deref())?;
            runtime::cleanup_runtime_files(&config.runtime);
        }
        Some(Commands::Validate { config }) => {
            info!("Validating configuration file: {:?}", config);
            match ProjectConfig::load_from_file(&config) {
                Ok(loaded) => match loaded.validate() {
                    Ok(_) => {
                        info!("Configuration validation successful");
                        println!("✓ Configuration file is valid: {:?}", config);
                    }
                    Err(e) => {
                        error!("Configuration validation failed: {}", e);
                        eprintln!("✗ Configuration validation failed: {}", e);
                        std::process::exit(1);
                    }
                },
                Err(e) => {
                    error!("Failed to load configuration file: {}", e);
                    eprintln!("✗ Failed to load configuration file: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

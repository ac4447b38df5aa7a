use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Einstein Coder project tools - inventory, scaffolding, and cleanup
#[derive(Parser)]
#[command(name = "einstein-coder")]
#[command(about = "Inventory and runtime scaffolding tools for the Einstein Coder project")]
#[command(version)]
pub struct Cli {
    /// Project root on the mounted storage volume.
    ///
    /// Falls back to $EINSTEIN_PROJECT_ROOT, then to the conventional mount
    /// point, when not given.
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Regenerate the project file inventory report (default command)
    Report,
    /// Print the expected-file manifest without checking existence
    Manifest,
    /// Ensure the local runtime scratch directories exist
    Scaffold {
        /// Path to a JSON configuration file overriding the default layout
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Delete the local runtime scratch tree
    Cleanup {
        /// Path to a JSON configuration file overriding the default layout
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Confirm destructive operation
        #[arg(long)]
        confirm: bool,
    },
    /// Validate a configuration file
    Validate {
        /// Path to configuration file to validate
        config: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}

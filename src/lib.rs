//! Einstein Coder Project Tools Library
//!
//! This library provides the project file inventory reporter and the runtime
//! scratch directory scaffolding for the Einstein Coder video pipeline.

pub mod cli;
pub mod config;
pub mod error;
pub mod manifest;
pub mod report;
pub mod runtime;

// Re-export main types for convenience
pub use config::{ProjectConfig, RuntimePaths, resolve_project_root, DEFAULT_PROJECT_ROOT};
pub use error::{EinsteinError, Result};
pub use manifest::{ProjectManifest, EXPECTED_FILES};
pub use report::{
    update_project_file_list, write_report, FileStatus, InventoryReport, ReportEntry,
};
pub use runtime::{cleanup_runtime_files, setup_runtime_directories};

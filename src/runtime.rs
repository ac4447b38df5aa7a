//! Runtime scratch directory scaffolding and cleanup
//!
//! The pipeline stages its downloads, intermediate audio/image assets, and
//! logs under a local scratch tree. This module creates that tree before a
//! run and tears it down afterwards. Cleanup is best-effort: every failure is
//! logged and the walk continues, so a locked file never blocks the rest of
//! the teardown.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::config::RuntimePaths;
use crate::error::Result;

/// Ensure the runtime base directory and all scratch subdirectories exist.
///
/// Idempotent; already-present directories are not an error.
pub fn setup_runtime_directories(paths: &RuntimePaths) -> Result<()> {
    fs::create_dir_all(&paths.base_dir)?;
    for dir in paths.subdirectories() {
        fs::create_dir_all(&dir)?;
    }
    info!(
        "All runtime directories ensured under: {}",
        paths.base_dir.display()
    );
    Ok(())
}

/// Remove everything under the runtime base directory, then the base
/// directory itself if it ended up empty.
///
/// Never propagates: each failed removal is logged at warn level and the
/// cleanup continues with the next entry.
pub fn cleanup_runtime_files(paths: &RuntimePaths) {
    let base = &paths.base_dir;
    info!(
        "Initiating cleanup of temporary runtime files under: {}",
        base.display()
    );

    if !base.exists() {
        info!("Runtime base directory does not exist, nothing to clean up");
        return;
    }

    match fs::read_dir(base) {
        Ok(entries) => {
            for entry in entries {
                match entry {
                    Ok(entry) => remove_entry(&entry.path()),
                    Err(e) => warn!("Failed to read runtime directory entry: {}", e),
                }
            }
        }
        Err(e) => {
            warn!("Failed to list runtime directory {}: {}", base.display(), e);
            return;
        }
    }

    // Only remove the base itself once it is empty; a partially cleaned tree
    // stays in place for inspection.
    match fs::read_dir(base) {
        Ok(mut remaining) => {
            if remaining.next().is_none() {
                if let Err(e) = fs::remove_dir(base) {
                    warn!(
                        "Failed to remove runtime base directory {}: {}",
                        base.display(),
                        e
                    );
                } else {
                    info!("Removed empty runtime base directory: {}", base.display());
                }
            } else {
                warn!(
                    "Runtime base directory {} is not empty after cleanup attempt",
                    base.display()
                );
            }
        }
        Err(e) => warn!("Failed to re-list runtime directory {}: {}", base.display(), e),
    }

    info!("Temporary file cleanup complete");
}

fn remove_entry(path: &Path) {
    let result = if path.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };

    match result {
        Ok(()) => info!("Cleaned up: {}", path.display()),
        Err(e) => warn!("Failed to clean up {}: {}", path.display(), e),
    }
}

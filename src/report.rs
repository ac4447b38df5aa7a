//! Project file inventory reporter
//!
//! Walks the expected-file manifest against a project root on the mounted
//! storage volume and writes a numbered, timestamped status report to
//! `<root>/docs/project_files_list.txt`, overwriting any previous report.
//!
//! Error handling is deliberately asymmetric: a failure to create the `docs`
//! directory propagates to the caller, but a failure to write the report file
//! itself is logged and swallowed. The report is a best-effort status
//! artifact and the surrounding launch flow has no recovery path for it.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use strum::{Display, EnumString};
use tracing::{error, info};

use crate::error::Result;
use crate::manifest::ProjectManifest;

/// Directory under the project root that holds generated documents
pub const DOCS_DIR: &str = "docs";

/// File name of the generated report inside [`DOCS_DIR`]
pub const REPORT_FILE_NAME: &str = "project_files_list.txt";

/// Timestamp format used in the report header
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Fixed report line count before the numbered entries
pub const HEADER_LINES: usize = 6;

/// Fixed report line count after the numbered entries
pub const FOOTER_LINES: usize = 2;

const TITLE_LINE: &str = "--- Einstein Coder Project Files List ---";
const PREAMBLE_LINE: &str = "Relative paths from project_2.0 folder, with existence check:";
const FOOTER_LINE: &str = "--- END OF LIST ---";

/// Existence status of a single manifest entry.
///
/// There is no third outcome: an existence check that fails (permission
/// error, transient storage fault) is indistinguishable from a confirmed
/// absence and reports as `MISSING!`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(Display, EnumString)]
pub enum FileStatus {
    #[strum(serialize = "Exists")]
    Exists,
    #[strum(serialize = "MISSING!")]
    Missing,
}

impl FileStatus {
    /// Check `<root>/<relative>` on the storage backend.
    ///
    /// `Path::exists` follows symlinks and folds stat errors into `false`.
    pub fn check(root: &Path, relative: &str) -> Self {
        if root.join(relative).exists() {
            FileStatus::Exists
        } else {
            FileStatus::Missing
        }
    }
}

/// One numbered line of the report body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    /// 1-based position in the manifest
    pub index: usize,
    /// Relative path as listed in the manifest
    pub path: String,
    /// Existence status at check time
    pub status: FileStatus,
}

impl ReportEntry {
    /// Render the entry as a report line, e.g. `01. config.py (Exists)`
    pub fn format_line(&self) -> String {
        format!("{:02}. {} ({})", self.index, self.path, self.status)
    }
}

/// A fully built report, ready to render or write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryReport {
    generated_on: String,
    entries: Vec<ReportEntry>,
}

impl InventoryReport {
    /// Check every manifest entry under `root` and stamp the report with the
    /// current local time
    pub fn generate(root: &Path, manifest: &ProjectManifest) -> Self {
        let generated_on = Local::now().format(TIMESTAMP_FORMAT).to_string();
        Self::generate_at(root, manifest, generated_on)
    }

    /// Check every manifest entry under `root` with an explicit timestamp
    /// string (tests pin the timestamp this way)
    pub fn generate_at(root: &Path, manifest: &ProjectManifest, generated_on: String) -> Self {
        let entries = manifest
            .entries()
            .iter()
            .enumerate()
            .map(|(i, path)| ReportEntry {
                index: i + 1,
                path: path.clone(),
                status: FileStatus::check(root, path),
            })
            .collect();

        Self {
            generated_on,
            entries,
        }
    }

    /// The numbered entries in manifest order
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// The header timestamp string
    pub fn generated_on(&self) -> &str {
        &self.generated_on
    }

    /// Report lines in output order, without line terminators
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(HEADER_LINES + self.entries.len() + FOOTER_LINES);
        lines.push(TITLE_LINE.to_string());
        lines.push(String::new());
        lines.push(format!("Generated on: {}", self.generated_on));
        lines.push(String::new());
        lines.push(PREAMBLE_LINE.to_string());
        lines.push(String::new());
        for entry in &self.entries {
            lines.push(entry.format_line());
        }
        lines.push(String::new());
        lines.push(FOOTER_LINE.to_string());
        lines
    }

    /// Render the full report body, newline-terminated
    pub fn render(&self) -> String {
        let mut body = self.lines().join("\n");
        body.push('\n');
        body
    }
}

/// Path of the report file for a given project root
pub fn report_path(root: &Path) -> PathBuf {
    root.join(DOCS_DIR).join(REPORT_FILE_NAME)
}

/// Regenerate `<root>/docs/project_files_list.txt` from the built-in manifest.
///
/// Creating the `docs` directory is the only step that can return `Err`. A
/// failed write is logged at error level and swallowed: the call still
/// returns `Ok(())` and the previous report (if any) is left in place.
pub fn update_project_file_list(root: &Path) -> Result<()> {
    let manifest = ProjectManifest::expected();
    write_report(root, &manifest)
}

/// Like [`update_project_file_list`] but with a caller-supplied manifest
pub fn write_report(root: &Path, manifest: &ProjectManifest) -> Result<()> {
    let docs_dir = root.join(DOCS_DIR);
    fs::create_dir_all(&docs_dir)?;

    let report = InventoryReport::generate(root, manifest);
    let output_path = docs_dir.join(REPORT_FILE_NAME);

    match fs::write(&output_path, report.render()) {
        Ok(()) => {
            info!(
                "Project file list generated and saved to {}",
                output_path.display()
            );
        }
        Err(e) => {
            error!(
                "Failed to write project file list to {}: {}",
                output_path.display(),
                e
            );
        }
    }

    Ok(())
}

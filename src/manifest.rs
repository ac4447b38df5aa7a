//! Expected project file manifest
//!
//! The manifest is the contract between this tool and the project layout on
//! the mounted storage volume: an ordered list of relative paths the pipeline
//! expects to find under the project root.
//!
//! # Design Principles
//!
//! 1. **Fixed at build time**: the expected list is a hardcoded table, not
//!    derived from whatever happens to be on disk
//! 2. **Order is meaning**: report lines are numbered in manifest order
//! 3. **Relative only**: every entry resolves against a single project root

use std::path::{Component, Path};

use crate::error::{EinsteinError, Result};

/// Relative paths expected under the project root, in report order.
///
/// Duplicates are not expected here but are not rejected at runtime; the
/// existence check treats each entry independently.
pub const EXPECTED_FILES: &[&str] = &[
    "config.py",
    "models.py",
    "pipeline.py",
    "ui_pipeline.py",
    "write_all_project_files.py",
    "utils/__init__.py",
    "utils/shell_utils.py",
    "utils/gcs_utils.py",
    "utils/cleanup.py",
    "utils/ffmpeg_utils.py",
    "utils/audio_utils.py",
    "utils/video_utils.py",
    "ai_integration/__init__.py",
    "ai_integration/gemini_integration.py",
    "ai_integration/speech_synthesis.py",
    "ai_integration/image_video_generation.py",
    "media_processing/__init__.py",
    "media_processing/video_editor.py",
    "new_features/__init__.py",
    "new_features/project_roadmap.py",
    "new_features/advanced_tts_controls.py",
    "new_features/cost_analyzer.py",
    "new_features/dynamic_visual_cues.py",
    "new_features/interactive_content_generation.py",
    "new_features/intro_outro_templates.py",
    "new_features/long_form_adaptation.py",
    "new_features/niche_content_specialization.py",
    "new_features/integrated_music_library.py",
    "new_features/multilingual_support.py",
    "new_features/feature_integration_pipeline.py",
    "new_features/list_writefiles.py",
];

/// Ordered set of relative paths to check under a project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectManifest {
    entries: Vec<String>,
}

impl ProjectManifest {
    /// The built-in manifest of expected project files
    pub fn expected() -> Self {
        Self {
            entries: EXPECTED_FILES.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Build a manifest from an arbitrary ordered list of relative paths
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Entries in report order
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the manifest has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validate that every entry is a plain relative path.
    ///
    /// Absolute entries or entries containing `..` would escape the project
    /// root, which is never intended.
    pub fn validate(&self) -> Result<()> {
        for entry in &self.entries {
            let path = Path::new(entry);
            if path.is_absolute() {
                return Err(EinsteinError::validation(format!(
                    "manifest entry must be relative: {entry}"
                )));
            }
            if path.components().any(|c| c == Component::ParentDir) {
                return Err(EinsteinError::validation(format!(
                    "manifest entry must not contain '..': {entry}"
                )));
            }
            if entry.is_empty() {
                return Err(EinsteinError::validation(
                    "manifest entry must not be empty",
                ));
            }
        }
        Ok(())
    }
}

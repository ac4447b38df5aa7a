//! Project configuration handling for the Einstein Coder tools
//!
//! Covers two concerns:
//! - the runtime scratch directory layout the pipeline writes into, loadable
//!   from a JSON file and defaulting to the conventional locations
//! - resolution of the project root on the mounted storage volume, applied
//!   once per invocation by the launcher (CLI argument, then environment
//!   variable, then the conventional mount point)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Conventional mount point of the project on the storage volume, used when
/// neither `--root` nor the environment variable is set
pub const DEFAULT_PROJECT_ROOT: &str = "/content/drive/MyDrive/project_2.0";

/// Environment variable consulted for the project root
pub const PROJECT_ROOT_ENV: &str = "EINSTEIN_PROJECT_ROOT";

fn default_base_dir() -> PathBuf {
    PathBuf::from("/tmp/tiktok_project_runtime")
}

fn default_video_downloads_dir() -> String {
    "video_downloads".to_string()
}

fn default_audio_dir() -> String {
    "audio".to_string()
}

fn default_images_dir() -> String {
    "images".to_string()
}

fn default_output_dir() -> String {
    "output".to_string()
}

fn default_temp_files_dir() -> String {
    "temp_files".to_string()
}

fn default_logs_dir() -> String {
    "logs".to_string()
}

/// Local runtime scratch directory layout.
///
/// Subdirectory fields are names relative to `base_dir`, never absolute
/// paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimePaths {
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,
    #[serde(default = "default_video_downloads_dir")]
    pub video_downloads_dir: String,
    #[serde(default = "default_audio_dir")]
    pub audio_dir: String,
    #[serde(default = "default_images_dir")]
    pub images_dir: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_temp_files_dir")]
    pub temp_files_dir: String,
    #[serde(default = "default_logs_dir")]
    pub logs_dir: String,
}

impl Default for RuntimePaths {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            video_downloads_dir: default_video_downloads_dir(),
            audio_dir: default_audio_dir(),
            images_dir: default_images_dir(),
            output_dir: default_output_dir(),
            temp_files_dir: default_temp_files_dir(),
            logs_dir: default_logs_dir(),
        }
    }
}

impl RuntimePaths {
    /// Subdirectory names relative to `base_dir`, in scaffold order
    pub fn subdirectory_names(&self) -> [&str; 6] {
        [
            &self.video_downloads_dir,
            &self.audio_dir,
            &self.images_dir,
            &self.output_dir,
            &self.temp_files_dir,
            &self.logs_dir,
        ]
    }

    /// Absolute subdirectory paths under `base_dir`, in scaffold order
    pub fn subdirectories(&self) -> Vec<PathBuf> {
        self.subdirectory_names()
            .iter()
            .map(|name| self.base_dir.join(name))
            .collect()
    }
}

/// Tool configuration that can be saved/loaded as JSON
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub runtime: RuntimePaths,
}

impl ProjectConfig {
    /// Create a configuration with the conventional defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write configuration to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration from {:?}", path.as_ref()))?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse configuration JSON")?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.runtime.base_dir.as_os_str().is_empty() {
            anyhow::bail!("Runtime base directory must be specified");
        }

        for name in self.runtime.subdirectory_names() {
            if name.trim().is_empty() {
                anyhow::bail!("Runtime subdirectory names must not be empty");
            }
            let path = Path::new(name);
            if path.is_absolute() {
                anyhow::bail!("Runtime subdirectory '{}' must be a relative name", name);
            }
            if path.components().any(|c| c == Component::ParentDir) {
                anyhow::bail!("Runtime subdirectory '{}' must not contain '..'", name);
            }
        }

        Ok(())
    }
}

/// Resolve the project root for this invocation.
///
/// Precedence: explicit argument, then `EINSTEIN_PROJECT_ROOT`, then the
/// conventional mount point. Resolved once by the launcher; library
/// operations always take the root as an explicit parameter.
pub fn resolve_project_root(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(root) = explicit {
        return root;
    }
    if let Ok(value) = std::env::var(PROJECT_ROOT_ENV) {
        if !value.trim().is_empty() {
            return PathBuf::from(value);
        }
    }
    PathBuf::from(DEFAULT_PROJECT_ROOT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_runtime_paths() {
        let paths = RuntimePaths::default();
        assert_eq!(paths.base_dir, PathBuf::from("/tmp/tiktok_project_runtime"));
        assert_eq!(
            paths.subdirectory_names(),
            ["video_downloads", "audio", "images", "output", "temp_files", "logs"]
        );
    }

    #[test]
    fn test_subdirectories_resolve_under_base() {
        let paths = RuntimePaths::default();
        for dir in paths.subdirectories() {
            assert!(dir.starts_with(&paths.base_dir));
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(ProjectConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_base_dir() {
        let mut config = ProjectConfig::default();
        config.runtime.base_dir = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_absolute_subdirectory() {
        let mut config = ProjectConfig::default();
        config.runtime.audio_dir = "/var/audio".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_parent_traversal() {
        let mut config = ProjectConfig::default();
        config.runtime.logs_dir = "../logs".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        let mut config = ProjectConfig::default();
        config.runtime.base_dir = dir.path().join("scratch");
        config.save_to_file(&path).unwrap();

        let loaded = ProjectConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_applies_defaults_for_missing_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "runtime": { "audio_dir": "narration" } }"#).unwrap();

        let loaded = ProjectConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.runtime.audio_dir, "narration");
        assert_eq!(loaded.runtime.logs_dir, "logs");
        assert_eq!(loaded.runtime.base_dir, default_base_dir());
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(ProjectConfig::load_from_file(&path).is_err());
    }

    #[test]
    fn test_resolve_project_root_prefers_explicit() {
        let root = resolve_project_root(Some(PathBuf::from("/tmp/explicit")));
        assert_eq!(root, PathBuf::from("/tmp/explicit"));
    }

    #[test]
    fn test_resolve_project_root_fallback_literal() {
        // The env var is not set in the test environment unless exported;
        // guard so a caller's environment cannot flip the assertion.
        if std::env::var(PROJECT_ROOT_ENV).is_err() {
            let root = resolve_project_root(None);
            assert_eq!(root, PathBuf::from(DEFAULT_PROJECT_ROOT));
        }
    }
}

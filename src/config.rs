//! Project configuration loader describing the publish output layout.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::project::PublishLayout;

/// Default configuration file searched for in the project root.
pub const DEFAULT_CONFIG_FILE: &str = "publish.config.json";

/// Discoverable project configuration for a publish run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Directory name the published tree is written into.
    pub publish_dir: String,
    /// Directory names that are never traversed or copied.
    pub excluded_dirs: Vec<String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            publish_dir: "publish".into(),
            excluded_dirs: vec![
                ".git".into(),
                ".cursor".into(),
                "__pycache__".into(),
                "node_modules".into(),
                "target".into(),
            ],
        }
    }
}

impl ProjectConfig {
    /// Attempt to load configuration from the provided project root.
    ///
    /// When the configuration file does not exist or fails to parse we fall back
    /// to default values so downstream callers can continue operating with
    /// sensible assumptions.
    pub fn discover(project_root: &Path) -> Self {
        let candidate = project_root.join(DEFAULT_CONFIG_FILE);
        Self::from_path(&candidate).unwrap_or_default()
    }

    /// Read configuration from a specific JSON file.
    pub fn from_path(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }

    /// Convert the configuration into an owned layout description.
    pub fn into_layout(self) -> PublishLayout {
        PublishLayout {
            publish_dir: self.publish_dir,
            excluded_dirs: self.excluded_dirs,
            config_file: DEFAULT_CONFIG_FILE.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn discover_falls_back_to_defaults_for_missing_file() {
        let dir = tempdir().unwrap();
        let config = ProjectConfig::discover(dir.path());
        assert_eq!(config.publish_dir, "publish");
        assert!(config.excluded_dirs.iter().any(|d| d == ".git"));
    }

    #[test]
    fn discover_falls_back_to_defaults_for_invalid_json() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "not json").unwrap();
        let config = ProjectConfig::discover(dir.path());
        assert_eq!(config.publish_dir, "publish");
    }

    #[test]
    fn discover_reads_configuration_file() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            r#"{"publish_dir": "dist", "excluded_dirs": [".git", "vendor"]}"#,
        )
        .unwrap();

        let config = ProjectConfig::discover(dir.path());
        assert_eq!(config.publish_dir, "dist");
        assert_eq!(config.excluded_dirs, vec![".git", "vendor"]);
    }

    #[test]
    fn partial_configuration_keeps_remaining_defaults() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            r#"{"publish_dir": "out"}"#,
        )
        .unwrap();

        let config = ProjectConfig::discover(dir.path());
        assert_eq!(config.publish_dir, "out");
        assert!(config.excluded_dirs.iter().any(|d| d == "node_modules"));
    }

    #[test]
    fn into_layout_carries_config_file_name() {
        let layout = ProjectConfig::default().into_layout();
        assert_eq!(layout.config_file, DEFAULT_CONFIG_FILE);
        assert_eq!(layout.publish_dir, "publish");
    }
}

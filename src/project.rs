//! Filesystem layout description shared across the publish pipeline.

/// Names describing where the publisher writes to and what it leaves alone.
#[derive(Debug, Clone)]
pub struct PublishLayout {
    /// Directory name receiving the published tree, fully owned by the tool.
    pub publish_dir: String,
    /// Directory names never descended into or copied.
    pub excluded_dirs: Vec<String>,
    /// Configuration file name skipped during the walk.
    pub config_file: String,
}

impl PublishLayout {
    /// Returns `true` when a directory with this name must not be traversed.
    ///
    /// The publish directory counts as excluded so a rebuild never copies its
    /// own previous output back into itself.
    pub fn is_excluded_dir(&self, name: &str) -> bool {
        name == self.publish_dir || self.excluded_dirs.iter().any(|dir| dir == name)
    }
}

impl Default for PublishLayout {
    fn default() -> Self {
        crate::config::ProjectConfig::default().into_layout()
    }
}

//! Publish orchestrator mirroring a source tree into a minified output directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use same_file::is_same_file;

use crate::minify::{minify_css, minify_html, minify_js};
use crate::models::{FileKind, PublishSummary};
use crate::project::PublishLayout;
use crate::rewrite::rewrite_asset_refs;
use crate::stamp::VersionStamp;

/// Hidden file name still published despite the leading dot.
const KEPT_HIDDEN_FILE: &str = ".htaccess";

/// High-level helper walking a project tree and writing its published mirror.
pub struct Publisher<'a> {
    project_root: &'a Path,
    layout: &'a PublishLayout,
}

impl<'a> Publisher<'a> {
    /// Create a publisher for the provided project root and layout.
    pub fn new(project_root: &'a Path, layout: &'a PublishLayout) -> Self {
        Self {
            project_root,
            layout,
        }
    }

    /// Publish the project tree using a stamp from the current UTC time.
    pub fn publish(&self) -> Result<PublishSummary> {
        self.publish_with_stamp(&VersionStamp::now())
    }

    /// Publish the project tree with an injected version stamp.
    ///
    /// The output directory is recreated empty first, so a rebuild leaves no
    /// stale files behind. A failure mid-run leaves the output partially
    /// written; the next run starts from a clean directory again.
    pub fn publish_with_stamp(&self, version: &VersionStamp) -> Result<PublishSummary> {
        let publish_root = self.reset_publish_dir()?;
        let mut summary = PublishSummary::default();
        self.publish_tree(
            self.project_root,
            Path::new(""),
            &publish_root,
            version,
            &mut summary,
        )?;
        Ok(summary)
    }

    /// Absolute path of the publish directory for this layout.
    pub fn publish_root(&self) -> PathBuf {
        self.project_root.join(&self.layout.publish_dir)
    }

    fn reset_publish_dir(&self) -> Result<PathBuf> {
        let publish_root = self.publish_root();
        if publish_root.is_dir() {
            fs::remove_dir_all(&publish_root)
                .with_context(|| format!("failed to remove {}", publish_root.display()))?;
        }
        fs::create_dir_all(&publish_root)
            .with_context(|| format!("failed to create {}", publish_root.display()))?;
        Ok(publish_root)
    }

    fn publish_tree(
        &self,
        dir: &Path,
        relative: &Path,
        publish_root: &Path,
        version: &VersionStamp,
        summary: &mut PublishSummary,
    ) -> Result<()> {
        let entries =
            fs::read_dir(dir).with_context(|| format!("failed to read {}", dir.display()))?;

        for entry in entries {
            let entry =
                entry.with_context(|| format!("failed to read entry in {}", dir.display()))?;
            let file_name = entry.file_name();
            let name = file_name.to_string_lossy();
            let path = entry.path();
            let file_type = entry
                .file_type()
                .with_context(|| format!("failed to inspect {}", path.display()))?;

            if file_type.is_dir() {
                if self.layout.is_excluded_dir(&name) {
                    continue;
                }
                // The output directory may be reached under another name; skip by identity too.
                if is_same_file(&path, publish_root)
                    .with_context(|| format!("failed to compare {}", path.display()))?
                {
                    continue;
                }
                self.publish_tree(&path, &relative.join(&file_name), publish_root, version, summary)?;
            } else if file_type.is_file() {
                if name.starts_with('.') && name != KEPT_HIDDEN_FILE {
                    continue;
                }
                if name == self.layout.config_file {
                    continue;
                }

                let dest = publish_root.join(relative).join(&file_name);
                if let Some(parent) = dest.parent() {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("failed to create {}", parent.display()))?;
                }

                let kind = FileKind::from_path(&path);
                self.publish_file(&path, &dest, kind, version)?;
                summary.record(kind);
            }
        }

        Ok(())
    }

    fn publish_file(
        &self,
        source: &Path,
        dest: &Path,
        kind: FileKind,
        version: &VersionStamp,
    ) -> Result<()> {
        match kind {
            FileKind::Html => {
                let content = read_text(source)?;
                let stamped = rewrite_asset_refs(&content, version);
                write_text(dest, &minify_html(&stamped))
            }
            FileKind::Css => {
                let content = read_text(source)?;
                write_text(dest, &minify_css(&content))
            }
            FileKind::Js => {
                let content = read_text(source)?;
                write_text(dest, &minify_js(&content))
            }
            FileKind::Other => copy_with_metadata(source, dest),
        }
    }
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn write_text(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}

/// Copy a file byte-for-byte, carrying the source modification time across.
fn copy_with_metadata(source: &Path, dest: &Path) -> Result<()> {
    fs::copy(source, dest)
        .with_context(|| format!("failed to copy {} to {}", source.display(), dest.display()))?;

    let modified = fs::metadata(source)
        .and_then(|metadata| metadata.modified())
        .with_context(|| format!("failed to read modification time of {}", source.display()))?;
    let dest_file = fs::OpenOptions::new()
        .write(true)
        .open(dest)
        .with_context(|| format!("failed to open {}", dest.display()))?;
    dest_file
        .set_modified(modified)
        .with_context(|| format!("failed to set modification time of {}", dest.display()))?;

    Ok(())
}

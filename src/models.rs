//! Transient records produced while publishing a site tree.

use std::path::Path;

/// Classification of a source file by extension, deciding its transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// HTML documents: asset references stamped, then minified.
    Html,
    /// Stylesheets: minified.
    Css,
    /// Scripts: conservatively minified.
    Js,
    /// Everything else: copied byte-for-byte.
    Other,
}

impl FileKind {
    /// Classify a path by its extension, case-insensitively.
    pub fn from_path(path: &Path) -> Self {
        let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
            return Self::Other;
        };
        match ext.to_ascii_lowercase().as_str() {
            "html" | "htm" => Self::Html,
            "css" => Self::Css,
            "js" => Self::Js,
            _ => Self::Other,
        }
    }
}

/// Counts of files written during one publish run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PublishSummary {
    /// HTML documents rewritten and minified.
    pub html: usize,
    /// Stylesheets minified.
    pub css: usize,
    /// Scripts minified.
    pub js: usize,
    /// Files copied verbatim.
    pub copied: usize,
}

impl PublishSummary {
    /// Total number of files written to the publish directory.
    pub fn total(&self) -> usize {
        self.html + self.css + self.js + self.copied
    }

    pub(crate) fn record(&mut self, kind: FileKind) {
        match kind {
            FileKind::Html => self.html += 1,
            FileKind::Css => self.css += 1,
            FileKind::Js => self.js += 1,
            FileKind::Other => self.copied += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_extension() {
        assert_eq!(FileKind::from_path(Path::new("index.html")), FileKind::Html);
        assert_eq!(FileKind::from_path(Path::new("page.htm")), FileKind::Html);
        assert_eq!(FileKind::from_path(Path::new("styles.css")), FileKind::Css);
        assert_eq!(FileKind::from_path(Path::new("script.js")), FileKind::Js);
        assert_eq!(FileKind::from_path(Path::new("logo.png")), FileKind::Other);
    }

    #[test]
    fn classification_ignores_case() {
        assert_eq!(FileKind::from_path(Path::new("INDEX.HTML")), FileKind::Html);
        assert_eq!(FileKind::from_path(Path::new("Theme.CsS")), FileKind::Css);
        assert_eq!(FileKind::from_path(Path::new("app.JS")), FileKind::Js);
    }

    #[test]
    fn missing_extension_is_other() {
        assert_eq!(FileKind::from_path(Path::new("Makefile")), FileKind::Other);
        assert_eq!(FileKind::from_path(Path::new(".htaccess")), FileKind::Other);
    }

    #[test]
    fn summary_totals_all_categories() {
        let mut summary = PublishSummary::default();
        summary.record(FileKind::Html);
        summary.record(FileKind::Html);
        summary.record(FileKind::Css);
        summary.record(FileKind::Other);
        assert_eq!(summary.html, 2);
        assert_eq!(summary.css, 1);
        assert_eq!(summary.js, 0);
        assert_eq!(summary.copied, 1);
        assert_eq!(summary.total(), 4);
    }
}

//! Cache-busting rewrites for the site stylesheet and script references.

use regex::{Captures, Regex};

use crate::stamp::VersionStamp;

/// Stylesheet file name eligible for version stamping.
pub const STYLESHEET_NAME: &str = "styles.css";

/// Script file name eligible for version stamping.
pub const SCRIPT_NAME: &str = "script.js";

/// Rewrite `href`/`src` references to the site assets to carry `?v=<stamp>`.
///
/// The match keys on the trailing file name, so `assets/styles.css` is stamped
/// the same as a bare `styles.css`; any existing `?v=...` query is replaced
/// rather than appended, making the rewrite idempotent for a given stamp. All
/// other attributes of the tag, and references to any other file names, are
/// left untouched.
pub fn rewrite_asset_refs(html: &str, version: &VersionStamp) -> String {
    let stamped = stamp_attribute(html, "href", STYLESHEET_NAME, version);
    stamp_attribute(&stamped, "src", SCRIPT_NAME, version)
}

fn stamp_attribute(html: &str, attribute: &str, file_name: &str, version: &VersionStamp) -> String {
    let pattern = Regex::new(&format!(
        r#"({attribute}="(?:[^"]*/)?{name})(\?v=[^"]*)?(")"#,
        name = regex::escape(file_name),
    ))
    .expect("invalid asset reference regex");

    pattern
        .replace_all(html, |caps: &Captures| {
            format!("{}?v={}{}", &caps[1], version, &caps[3])
        })
        .into_owned()
}

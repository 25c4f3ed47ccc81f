//! Basic CSS minification through comment removal and whitespace tightening.

use regex::Regex;

/// Minify CSS text.
///
/// Comments are removed before whitespace collapses so collapsed runs cannot
/// reconnect commented-out fragments; punctuation tightening runs last, over
/// text that is already single-spaced.
pub fn minify_css(content: &str) -> String {
    let comment_pattern = Regex::new(r"(?s)/\*.*?\*/").expect("invalid comment regex");
    let content = comment_pattern.replace_all(content, "");

    let whitespace_pattern = Regex::new(r"\s+").expect("invalid whitespace regex");
    let content = whitespace_pattern.replace_all(&content, " ");

    let punctuation_pattern =
        Regex::new(r"\s*([{}:;,>+~=()])\s*").expect("invalid punctuation regex");
    let content = punctuation_pattern.replace_all(&content, "$1");

    content.trim().to_string()
}

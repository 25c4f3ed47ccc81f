//! Conservative JavaScript minification that preserves statement boundaries.

/// Strip indentation and blank lines without joining statements.
///
/// Joining statements onto one line can change semantics when code relies on
/// automatic semicolon insertion, so surviving lines are rejoined with
/// newlines. No comment removal, no token-level minification.
pub fn minify_js(content: &str) -> String {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

//! Light HTML minification keeping conditional comments intact.

use regex::{Captures, Regex};

/// Minify HTML by stripping comments and collapsing the text onto one line.
///
/// Comments whose body begins with `[if` carry meaning for older browsers and
/// survive verbatim; every other `<!-- ... -->` span is removed, across line
/// boundaries. The remaining lines are trimmed, empty lines dropped, and the
/// survivors joined with a single space.
pub fn minify_html(content: &str) -> String {
    let comment_pattern = Regex::new(r"(?s)<!--(.*?)-->").expect("invalid comment regex");
    let stripped = comment_pattern.replace_all(content, |caps: &Captures| {
        if caps[1].starts_with("[if") {
            caps[0].to_string()
        } else {
            String::new()
        }
    });

    stripped
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

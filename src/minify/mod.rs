//! Text-safe minifiers, one per file type.
//!
//! Each minifier is a total function over arbitrary text: malformed markup or
//! unbalanced comments are processed mechanically, never rejected. The rules
//! are deliberately textual, with no parsing beyond the comment patterns.

mod css;
mod html;
mod js;

pub use css::minify_css;
pub use html::minify_html;
pub use js::minify_js;

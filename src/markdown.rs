//! Markdown to HTML conversion.
//!
//! Uses comrak with the table extension (fenced code is part of CommonMark)
//! and colours fenced code blocks with syntect CSS classes.

mod renderer;
mod theme;

pub use renderer::MarkdownRenderer;
pub use theme::{DEFAULT_THEME, theme_css, theme_exists};

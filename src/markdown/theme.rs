//! Stylesheets for syntect highlighting themes.

use anyhow::{Context, Result};
use std::sync::OnceLock;
use syntect::highlighting::ThemeSet;
use syntect::html::{ClassStyle, css_for_theme_with_class_style};

/// Theme used when none is configured.
pub const DEFAULT_THEME: &str = "InspiredGitHub";

/// CSS class prefix shared by the renderer and the generated stylesheet.
pub(super) const CLASS_PREFIX: &str = "hl-";

/// Bundled syntect themes, deserialized on first use.
fn themes() -> &'static ThemeSet {
    static THEMES: OnceLock<ThemeSet> = OnceLock::new();
    THEMES.get_or_init(ThemeSet::load_defaults)
}

/// Reports whether a theme is bundled with syntect.
pub fn theme_exists(name: &str) -> bool {
    themes().themes.contains_key(name)
}

/// Generates CSS rules for highlighted code in the named theme.
///
/// Class names match those emitted by [`super::MarkdownRenderer`].
///
/// # Errors
///
/// Returns error if the theme is unknown or CSS generation fails.
pub fn theme_css(name: &str) -> Result<String> {
    let theme = themes()
        .themes
        .get(name)
        .with_context(|| format!("Unknown highlighting theme: {}", name))?;

    css_for_theme_with_class_style(
        theme,
        ClassStyle::SpacedPrefixed {
            prefix: CLASS_PREFIX,
        },
    )
    .with_context(|| format!("Failed to generate CSS for theme: {}", name))
}

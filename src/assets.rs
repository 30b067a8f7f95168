//! Print stylesheet bundling

use anyhow::Result;

use crate::markdown::theme_css;

const PRINT: &str = include_str!("../assets/print.css");
const CODE: &str = include_str!("../assets/code.css");

/// Builds the stylesheet embedded in every document.
///
/// Concatenates the page and typography rules, code block rules, and the
/// highlighting colours for `theme`.
///
/// # Errors
///
/// Returns error if the theme is unknown.
pub fn stylesheet(theme: &str) -> Result<String> {
    let highlight = theme_css(theme)?;
    Ok(bundle(&[PRINT, CODE, &highlight]))
}

fn bundle(parts: &[&str]) -> String {
    parts.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::DEFAULT_THEME;

    #[test]
    fn test_stylesheet_page_geometry() {
        // Act
        let css = stylesheet(DEFAULT_THEME).expect("Should build stylesheet");

        // Assert
        assert!(css.contains("size: A4;"), "Should declare A4 pages");
        assert!(
            css.contains("margin: 20mm 20mm 25mm 20mm;"),
            "Should declare page margins"
        );
    }

    #[test]
    fn test_stylesheet_keeps_column_alignment() {
        // Act
        let css = stylesheet(DEFAULT_THEME).expect("Should build stylesheet");

        // Assert: aligned cells must override the left-aligned default
        let default = css.find("text-align: left;").expect("default alignment");
        let right = css
            .find("th[align=right], td[align=right] {\n    text-align: right;")
            .expect("right aligned columns");
        let center = css
            .find("th[align=center], td[align=center] {\n    text-align: center;")
            .expect("centered columns");
        assert!(default < right && default < center);
    }

    #[test]
    fn test_stylesheet_sections_in_order() {
        // Act
        let css = stylesheet(DEFAULT_THEME).expect("Should build stylesheet");

        // Assert: theme rules come last so they win over generic code rules
        let page = css.find("@page").expect("page rules");
        let pre = css.find("pre {").expect("code rules");
        let theme = css.find(".hl-").expect("theme rules");
        assert!(page < pre && pre < theme);
    }

    #[test]
    fn test_stylesheet_unknown_theme() {
        assert!(stylesheet("Missing").is_err());
    }
}

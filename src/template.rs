//! HTML document wrapper for print rendering

use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Wraps rendered markdown in a standalone HTML document.
///
/// The stylesheet is inlined so the document renders without any external
/// resources. The title ends up as the PDF document title.
///
/// # Arguments
///
/// * `title`: Document title, escaped
/// * `stylesheet`: CSS inserted into a single `<style>` element
/// * `body_html`: Rendered markdown, inserted unescaped
pub fn document(title: &str, stylesheet: &str, body_html: &str) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { (title) }
                style { (PreEscaped(stylesheet)) }
            }
            body {
                (PreEscaped(body_html))
            }
        }
    }
}

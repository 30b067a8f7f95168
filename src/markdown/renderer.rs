//! Markdown rendering with tables and highlighted fenced code.

use anyhow::{Context, Result};
use comrak::Options;
use std::path::Path;
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use super::theme::CLASS_PREFIX;

/// Renders markdown to HTML fragments for print documents.
///
/// Enables the table extension; fenced code blocks are part of CommonMark.
/// Raw HTML in the source passes through untouched. Fenced code with a
/// language tag is highlighted with syntect using `hl-` CSS classes, so
/// colours come from the stylesheet rather than inline styles.
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
    syntax_set: SyntaxSet,
}

impl<'a> MarkdownRenderer<'a> {
    /// Creates renderer with table support and raw HTML passthrough.
    pub fn new() -> Self {
        let mut options = Options::default();

        options.extension.table = true;

        // Local documents are trusted
        options.render.unsafe_ = true;

        let syntax_set = SyntaxSet::load_defaults_newlines();

        Self {
            options,
            syntax_set,
        }
    }

    /// Renders markdown content to an HTML fragment.
    ///
    /// # Errors
    ///
    /// Returns error if syntax highlighting fails
    pub fn render(&self, content: &str) -> Result<String> {
        let html = comrak::markdown_to_html(content, &self.options);
        self.highlight_code_blocks(&html)
    }

    /// Renders markdown file at given path.
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read as UTF8 or rendering fails
    pub fn render_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read markdown file: {}", path.display()))?;
        self.render(&content)
    }

    /// Replaces `<code class="language-X">` contents with highlighted HTML.
    ///
    /// Code blocks without a language class are left as comrak wrote them.
    fn highlight_code_blocks(&self, html: &str) -> Result<String> {
        const OPEN: &str = "<code class=\"language-";
        const CLOSE: &str = "</code>";

        let mut result = String::with_capacity(html.len());
        let mut last_end = 0;
        let mut search_pos = 0;

        while let Some(found) = html[search_pos..].find(OPEN) {
            let code_start = search_pos + found;
            let lang_start = code_start + OPEN.len();

            let Some(lang_len) = html[lang_start..].find('"') else {
                search_pos = lang_start;
                continue;
            };
            let lang_end = lang_start + lang_len;
            let language = &html[lang_start..lang_end];

            let Some(tag_len) = html[lang_end..].find('>') else {
                search_pos = lang_start;
                continue;
            };
            let content_start = lang_end + tag_len + 1;

            let Some(content_len) = html[content_start..].find(CLOSE) else {
                search_pos = lang_start;
                continue;
            };
            let content_end = content_start + content_len;

            let code = Self::html_decode(&html[content_start..content_end]);
            let highlighted = self
                .highlight_code(&code, language)
                .with_context(|| format!("Failed to highlight {} code block", language))?;

            result.push_str(&html[last_end..code_start]);
            result.push_str(OPEN);
            result.push_str(language);
            result.push_str("\">");
            result.push_str(&highlighted);
            result.push_str(CLOSE);

            last_end = content_end + CLOSE.len();
            search_pos = last_end;
        }

        result.push_str(&html[last_end..]);
        Ok(result)
    }

    /// Highlights code with syntect, or escapes it for unknown languages.
    fn highlight_code(&self, code: &str, language: &str) -> Result<String> {
        if code.is_empty() {
            return Ok(String::new());
        }

        let syntax = self
            .syntax_set
            .find_syntax_by_token(language)
            .or_else(|| self.syntax_set.find_syntax_by_extension(language));

        let Some(syntax) = syntax else {
            return Ok(Self::html_escape(code));
        };

        let mut generator = ClassedHTMLGenerator::new_with_class_style(
            syntax,
            &self.syntax_set,
            ClassStyle::SpacedPrefixed {
                prefix: CLASS_PREFIX,
            },
        );

        for line in LinesWithEndings::from(code) {
            generator
                .parse_html_for_line_which_includes_newline(line)
                .context("Failed to parse line for syntax highlighting")?;
        }

        Ok(generator.finalize())
    }

    /// Reverses the entity escaping comrak applies inside code blocks.
    fn html_decode(html: &str) -> String {
        html.replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&amp;", "&")
    }

    fn html_escape(text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
    }
}

impl<'a> Default for MarkdownRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}

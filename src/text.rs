// src/text.rs

//! HTML-to-text conversion and body normalization.
//!
//! Site strategies extract the poem body as an HTML fragment; this module
//! turns that fragment into canonical plain text. The converter carries no
//! mutable state, so extractions can run concurrently against one value.

use html2text::render::text_renderer::TrivialDecorator;

use crate::error::{AppError, Result};
use crate::models::TextConfig;

/// Immutable HTML-to-text converter configuration.
#[derive(Debug, Clone)]
pub struct TextConverter {
    ignore_links: bool,
    wrap_width: usize,
}

impl TextConverter {
    /// Build a converter from the text configuration section.
    pub fn new(config: &TextConfig) -> Self {
        Self {
            ignore_links: config.ignore_links,
            wrap_width: config.wrap_width,
        }
    }

    /// Convert an HTML fragment to plain text, preserving line breaks.
    ///
    /// Literal non-breaking spaces are rewritten as `&nbsp;` entities
    /// before conversion so the renderer keeps them as visible spacing
    /// instead of collapsing them with surrounding whitespace.
    pub fn fragment_to_text(&self, html: &str) -> Result<String> {
        let prepared = preserve_nbsp(html);
        let rendered = if self.ignore_links {
            html2text::config::with_decorator(TrivialDecorator::new())
                .string_from_read(prepared.as_bytes(), self.wrap_width)
        } else {
            html2text::config::plain().string_from_read(prepared.as_bytes(), self.wrap_width)
        };
        rendered.map_err(|e| AppError::TextRender(e.to_string()))
    }
}

impl Default for TextConverter {
    fn default() -> Self {
        Self::new(&TextConfig::default())
    }
}

/// Rewrite literal U+00A0 characters as `&nbsp;` entities.
pub fn preserve_nbsp(html: &str) -> String {
    html.replace('\u{a0}', "&nbsp;")
}

/// Collapse doubled blank lines into single newlines.
///
/// Runs to a fixpoint so applying it to already-normalized text is a
/// no-op.
pub fn collapse_blank_lines(text: &str) -> String {
    let mut result = text.to_string();
    while result.contains("\n\n") {
        result = result.replace("\n\n", "\n");
    }
    result
}

/// Strip a literal 4-space indent following each newline.
pub fn strip_leading_indent(text: &str) -> String {
    text.replace("\n    ", "\n")
}

/// Strip a literal `"by "` prefix from an author display name, if present.
pub fn strip_by_prefix(author: &str) -> &str {
    author
        .strip_prefix("by ")
        .or_else(|| author.strip_prefix("By "))
        .unwrap_or(author)
}

/// Split a combined header into `(title, author)`.
///
/// The first comma splits `"Author, Title"`; without a comma the literal
/// `" by "` splits `"Title by Author"`. Returns `None` when neither
/// separator is present.
pub fn split_title_author(header: &str) -> Option<(String, String)> {
    if let Some((author, title)) = header.split_once(',') {
        return Some((title.trim().to_string(), author.trim().to_string()));
    }
    header
        .split_once(" by ")
        .map(|(title, author)| (title.trim().to_string(), author.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_to_text_preserves_lines() {
        let converter = TextConverter::default();
        let text = converter
            .fragment_to_text("<div><p>line one</p><p>line two</p></div>")
            .unwrap();
        assert!(text.contains("line one"));
        assert!(text.contains("line two"));
        // Paragraphs stay on separate lines.
        assert!(!text.contains("line one line two"));
    }

    #[test]
    fn test_fragment_to_text_suppresses_links() {
        let converter = TextConverter::default();
        let text = converter
            .fragment_to_text(r#"<p>see <a href="https://example.com/x">the rest</a></p>"#)
            .unwrap();
        assert!(text.contains("the rest"));
        assert!(!text.contains("example.com"));
    }

    #[test]
    fn test_preserve_nbsp() {
        assert_eq!(preserve_nbsp("a\u{a0}b"), "a&nbsp;b");
        assert_eq!(preserve_nbsp("plain"), "plain");
    }

    #[test]
    fn test_collapse_blank_lines() {
        assert_eq!(collapse_blank_lines("a\n\nb"), "a\nb");
        assert_eq!(collapse_blank_lines("a\n\n\n\nb"), "a\nb");
    }

    #[test]
    fn test_collapse_blank_lines_idempotent() {
        let collapsed = collapse_blank_lines("first\n\nsecond\n\n\nthird");
        assert_eq!(collapse_blank_lines(&collapsed), collapsed);
    }

    #[test]
    fn test_strip_leading_indent() {
        assert_eq!(strip_leading_indent("a\n    b\n    c"), "a\nb\nc");
        assert_eq!(strip_leading_indent("no indent"), "no indent");
    }

    #[test]
    fn test_strip_by_prefix() {
        assert_eq!(strip_by_prefix("by Jane Doe"), "Jane Doe");
        assert_eq!(strip_by_prefix("By Jane Doe"), "Jane Doe");
        assert_eq!(strip_by_prefix("Jane Doe"), "Jane Doe");
    }

    #[test]
    fn test_split_title_author_on_comma() {
        let (title, author) = split_title_author("Jane Doe, Evening Light").unwrap();
        assert_eq!(author, "Jane Doe");
        assert_eq!(title, "Evening Light");
    }

    #[test]
    fn test_split_title_author_by_fallback() {
        let (title, author) = split_title_author("Evening Light by Jane Doe").unwrap();
        assert_eq!(author, "Jane Doe");
        assert_eq!(title, "Evening Light");
    }

    #[test]
    fn test_split_title_author_no_separator() {
        assert!(split_title_author("Evening Light").is_none());
    }
}

//! Library of Congress poet-laureate project pages.
//!
//! The most brittle of the registered sites: the title carries a
//! numeric "Poem NNN:" prefix and the body markup alternates between
//! `pre` and `p` across pages.

use std::sync::OnceLock;

use regex::Regex;
use scraper::Html;

use crate::error::Result;
use crate::models::PoemFields;
use crate::services::extractor::{
    element_text, non_empty, select_html_first, select_nth, select_text,
};
use crate::text::{TextConverter, collapse_blank_lines, strip_leading_indent};

const SITE: &str = "loc_laureate";

const TITLE: &str = "[id=page-title] > .smaller-h1 > span";
const AUTHOR: &str = ".info > h2";
const BODY: &[&str] = &[".poem > pre", ".poem > p"];

static POEM_PREFIX: OnceLock<Regex> = OnceLock::new();

fn poem_prefix() -> &'static Regex {
    POEM_PREFIX.get_or_init(|| Regex::new(r"Poem \d{3}:").expect("valid literal regex"))
}

/// Strip the numeric "Poem NNN:" prefix from a title.
fn clean_title(raw: &str) -> String {
    poem_prefix().replace(raw, "").trim().to_string()
}

pub fn extract(doc: &Html, converter: &TextConverter) -> Result<PoemFields> {
    // The title lives in the second span of the page heading. Stripping
    // the numeric prefix must leave something behind.
    let title_elem = select_nth(doc, TITLE, 1, SITE, "title")?;
    let title = non_empty(clean_title(&element_text(&title_elem)), SITE, "title")?;
    let author = select_text(doc, AUTHOR, SITE, "author")?;

    let html = select_html_first(doc, BODY, SITE, "body")?;
    let text = converter.fragment_to_text(&html)?;
    let body = strip_leading_indent(&collapse_blank_lines(&text))
        .trim_end()
        .to_string();

    Ok(PoemFields { title, author, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><body>
        <div id="page-title"><h1 class="smaller-h1">
            <span>Poet Laureate Projects</span><span>Poem 042: Quiet Field</span>
        </h1></div>
        <div class="info"><h2>Ada Limon</h2></div>
        <div class="poem"><pre>a field
    of quiet grass</pre></div>
    </body></html>"#;

    #[test]
    fn test_extract_strips_title_prefix_and_indent() {
        let doc = Html::parse_document(PAGE);
        let fields = extract(&doc, &TextConverter::default()).unwrap();
        assert_eq!(fields.title, "Quiet Field");
        assert_eq!(fields.author, "Ada Limon");
        assert!(fields.body.contains("a field"));
        assert!(!fields.body.contains("\n    "));
    }

    #[test]
    fn test_body_falls_back_to_paragraph() {
        let page = r#"
            <div id="page-title"><h1 class="smaller-h1">
                <span>Projects</span><span>Poem 007: Sparrow</span>
            </h1></div>
            <div class="info"><h2>J. Doe</h2></div>
            <div class="poem"><p>one sparrow<br>on the wire</p></div>"#;
        let doc = Html::parse_document(page);
        let fields = extract(&doc, &TextConverter::default()).unwrap();
        assert!(fields.body.contains("one sparrow"));
    }

    #[test]
    fn test_clean_title_without_prefix() {
        assert_eq!(clean_title("Plain Title"), "Plain Title");
        assert_eq!(clean_title("Poem 123: Counted"), "Counted");
    }

    #[test]
    fn test_prefix_only_title_fails() {
        let page = r#"
            <div id="page-title"><h1 class="smaller-h1">
                <span>Projects</span><span>Poem 042:</span>
            </h1></div>
            <div class="info"><h2>J. Doe</h2></div>
            <div class="poem"><pre>x</pre></div>"#;
        let doc = Html::parse_document(page);
        let err = extract(&doc, &TextConverter::default()).unwrap_err();
        assert!(matches!(
            err,
            crate::error::AppError::MissingField { field: "title", .. }
        ));
    }

    #[test]
    fn test_missing_second_span_fails() {
        let page = r#"
            <div id="page-title"><h1 class="smaller-h1"><span>only one</span></h1></div>
            <div class="info"><h2>J. Doe</h2></div>
            <div class="poem"><pre>x</pre></div>"#;
        let doc = Html::parse_document(page);
        assert!(extract(&doc, &TextConverter::default()).is_err());
    }
}

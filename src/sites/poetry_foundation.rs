//! poetryfoundation.org extraction rules.

use scraper::Html;

use crate::error::Result;
use crate::models::PoemFields;
use crate::services::extractor::{select_html_first, select_text};
use crate::text::{TextConverter, collapse_blank_lines};

const SITE: &str = "poetryfoundation";

const TITLE: &str = ".c-feature-hd > h1";
const AUTHOR: &str = ".c-txt_attribution > a";
const BODY: &str = ".o-poem";

pub fn extract(doc: &Html, converter: &TextConverter) -> Result<PoemFields> {
    let title = select_text(doc, TITLE, SITE, "title")?;
    let author = select_text(doc, AUTHOR, SITE, "author")?;

    let html = select_html_first(doc, &[BODY], SITE, "body")?;
    let text = converter.fragment_to_text(&html)?;
    let body = collapse_blank_lines(&text).trim_end().to_string();

    Ok(PoemFields { title, author, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><body>
        <div class="c-feature-hd"><h1> The Road </h1></div>
        <div class="c-txt_attribution">By <a href="/poet/1">R. Frost</a></div>
        <div class="o-poem"><div>Two roads diverged</div><div>in a yellow wood</div></div>
    </body></html>"#;

    #[test]
    fn test_extract() {
        let doc = Html::parse_document(PAGE);
        let fields = extract(&doc, &TextConverter::default()).unwrap();
        assert_eq!(fields.title, "The Road");
        assert_eq!(fields.author, "R. Frost");
        assert!(fields.body.contains("Two roads diverged"));
        assert!(!fields.body.contains("\n\n"));
    }

    #[test]
    fn test_missing_body_fails() {
        let doc = Html::parse_document(
            r#"<div class="c-feature-hd"><h1>T</h1></div>
               <div class="c-txt_attribution"><a>A</a></div>"#,
        );
        assert!(extract(&doc, &TextConverter::default()).is_err());
    }
}

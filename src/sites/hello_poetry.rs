//! hellopoetry.com extraction rules.

use scraper::Html;

use crate::error::Result;
use crate::models::PoemFields;
use crate::services::extractor::{select_html_first, select_text};
use crate::text::{TextConverter, collapse_blank_lines, strip_by_prefix};

const SITE: &str = "hellopoetry";

const TITLE: &str = "div.poem h2";
const AUTHOR: &str = "div.poem a.author";
const BODY: &str = "div.poem div.body";

pub fn extract(doc: &Html, converter: &TextConverter) -> Result<PoemFields> {
    let title = select_text(doc, TITLE, SITE, "title")?;
    // The author link reads "by <name>".
    let author = strip_by_prefix(&select_text(doc, AUTHOR, SITE, "author")?).to_string();

    let html = select_html_first(doc, &[BODY], SITE, "body")?;
    let text = converter.fragment_to_text(&html)?;
    let body = collapse_blank_lines(&text).trim_end().to_string();

    Ok(PoemFields { title, author, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<div class="poem">
        <h2>Harbor</h2>
        <a class="author" href="/u/doe">by Jane Doe</a>
        <div class="body"><p>boats at rest</p><p>in grey water</p></div>
    </div>"#;

    #[test]
    fn test_extract_strips_author_prefix() {
        let doc = Html::parse_document(PAGE);
        let fields = extract(&doc, &TextConverter::default()).unwrap();
        assert_eq!(fields.title, "Harbor");
        assert_eq!(fields.author, "Jane Doe");
        assert!(fields.body.contains("boats at rest"));
    }
}

//! poets.org extraction rules.

use scraper::Html;

use crate::error::Result;
use crate::models::PoemFields;
use crate::services::extractor::{select_html_first, select_text};
use crate::text::TextConverter;

const SITE: &str = "poetsorg";

const TITLE: &str = ".poem__title";
const AUTHOR: &str = ".card-subtitle > a";
const BODY: &str = ".poem__body";

pub fn extract(doc: &Html, converter: &TextConverter) -> Result<PoemFields> {
    let title = select_text(doc, TITLE, SITE, "title")?;
    let author = select_text(doc, AUTHOR, SITE, "author")?;

    // Stanza breaks on this site are real blank lines; no collapse.
    let html = select_html_first(doc, &[BODY], SITE, "body")?;
    let body = converter.fragment_to_text(&html)?.trim_end().to_string();

    Ok(PoemFields { title, author, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><body>
        <h1 class="poem__title">Dusk</h1>
        <div class="card-subtitle"><a href="/poet/doe">J. Doe</a></div>
        <div class="poem__body"><p>The light goes down</p><p>over the hill</p></div>
    </body></html>"#;

    #[test]
    fn test_extract() {
        let doc = Html::parse_document(PAGE);
        let fields = extract(&doc, &TextConverter::default()).unwrap();
        assert_eq!(fields.title, "Dusk");
        assert_eq!(fields.author, "J. Doe");
        assert!(fields.body.contains("The light goes down"));
        assert!(!fields.body.is_empty());
    }

    #[test]
    fn test_whitespace_only_title_fails() {
        let doc = Html::parse_document(
            r#"<h1 class="poem__title">   </h1>
               <div class="card-subtitle"><a>J. Doe</a></div>
               <div class="poem__body"><p>x</p></div>"#,
        );
        let err = extract(&doc, &TextConverter::default()).unwrap_err();
        assert!(matches!(
            err,
            crate::error::AppError::MissingField { field: "title", .. }
        ));
    }

    #[test]
    fn test_missing_author_fails() {
        let doc = Html::parse_document(
            r#"<h1 class="poem__title">Dusk</h1><div class="poem__body"><p>x</p></div>"#,
        );
        assert!(extract(&doc, &TextConverter::default()).is_err());
    }
}

//! allpoetry.com extraction rules.

use scraper::Html;

use crate::error::Result;
use crate::models::PoemFields;
use crate::services::extractor::{select_html_first, select_text};
use crate::text::{TextConverter, collapse_blank_lines};

const SITE: &str = "allpoetry";

const TITLE: &str = "h1.title";
const AUTHOR: &str = "a.u";
// Member pages wrap the original text; older pages do not.
const BODY: &[&str] = &[".poem_body .original_text", ".poem_body"];

pub fn extract(doc: &Html, converter: &TextConverter) -> Result<PoemFields> {
    let title = select_text(doc, TITLE, SITE, "title")?;
    let author = select_text(doc, AUTHOR, SITE, "author")?;

    let html = select_html_first(doc, BODY, SITE, "body")?;
    let text = converter.fragment_to_text(&html)?;
    let body = collapse_blank_lines(&text).trim_end().to_string();

    Ok(PoemFields { title, author, body })
}

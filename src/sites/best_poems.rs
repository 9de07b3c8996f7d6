//! best-poems.net extraction rules.

use scraper::Html;

use crate::error::Result;
use crate::models::PoemFields;
use crate::services::extractor::{select_html_first, select_text};
use crate::text::{TextConverter, collapse_blank_lines, strip_by_prefix};

const SITE: &str = "bestpoems";

const TITLE: &str = "h1.poem-title";
const AUTHOR: &str = ".poem-author a";
const BODY: &str = ".poem-content";

pub fn extract(doc: &Html, converter: &TextConverter) -> Result<PoemFields> {
    let title = select_text(doc, TITLE, SITE, "title")?;
    let author = strip_by_prefix(&select_text(doc, AUTHOR, SITE, "author")?).to_string();

    let html = select_html_first(doc, &[BODY], SITE, "body")?;
    let text = converter.fragment_to_text(&html)?;
    let body = collapse_blank_lines(&text).trim_end().to_string();

    Ok(PoemFields { title, author, body })
}

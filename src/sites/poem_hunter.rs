//! poemhunter.com extraction rules.

use scraper::Html;

use crate::error::Result;
use crate::models::PoemFields;
use crate::services::extractor::{select_html_first, select_text};
use crate::text::TextConverter;

const SITE: &str = "poemhunter";

const TITLE: &str = ".phPageDetailsTitle";
const AUTHOR: &str = ".phpdAuthor > a";
const BODY: &str = ".phContent";

pub fn extract(doc: &Html, converter: &TextConverter) -> Result<PoemFields> {
    let title = select_text(doc, TITLE, SITE, "title")?;
    let author = select_text(doc, AUTHOR, SITE, "author")?;

    let html = select_html_first(doc, &[BODY], SITE, "body")?;
    let body = converter.fragment_to_text(&html)?.trim_end().to_string();

    Ok(PoemFields { title, author, body })
}

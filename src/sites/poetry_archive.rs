//! poetryarchive.org extraction rules.

use scraper::Html;

use crate::error::Result;
use crate::models::PoemFields;
use crate::services::extractor::{select_html_first, select_text};
use crate::text::{TextConverter, collapse_blank_lines};

const SITE: &str = "poetryarchive";

const TITLE: &str = ".single-poem h1";
const AUTHOR: &str = ".single-poem .poet-name a";
// Transcribed pages use a pre block, newer ones plain markup.
const BODY: &[&str] = &[".poem-content pre", ".poem-content"];

pub fn extract(doc: &Html, converter: &TextConverter) -> Result<PoemFields> {
    let title = select_text(doc, TITLE, SITE, "title")?;
    let author = select_text(doc, AUTHOR, SITE, "author")?;

    let html = select_html_first(doc, BODY, SITE, "body")?;
    let text = converter.fragment_to_text(&html)?;
    let body = collapse_blank_lines(&text).trim_end().to_string();

    Ok(PoemFields { title, author, body })
}

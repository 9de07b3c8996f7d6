//! poetrynook.com extraction rules.
//!
//! The page heading is a single combined node, either "Author, Title"
//! or "Title by Author"; the split rule lives in [`crate::text`].

use scraper::Html;

use crate::error::{AppError, Result};
use crate::models::PoemFields;
use crate::services::extractor::{non_empty, select_html_first, select_text};
use crate::text::{TextConverter, collapse_blank_lines, split_title_author};

const SITE: &str = "poetrynook";

const HEADER: &str = "h1.page-title";
const BODY: &[&str] = &["pre.poem", ".poem-text"];

pub fn extract(doc: &Html, converter: &TextConverter) -> Result<PoemFields> {
    let header = select_text(doc, HEADER, SITE, "title")?;
    let (title, author) =
        split_title_author(&header).ok_or_else(|| AppError::missing_field(SITE, "author"))?;
    // A separator with nothing on one side is as bad as no separator.
    let title = non_empty(title, SITE, "title")?;
    let author = non_empty(author, SITE, "author")?;

    let html = select_html_first(doc, BODY, SITE, "body")?;
    let text = converter.fragment_to_text(&html)?;
    let body = collapse_blank_lines(&text).trim_end().to_string();

    Ok(PoemFields { title, author, body })
}

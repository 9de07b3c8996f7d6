// src/services/extractor.rs

//! Structural query helpers.
//!
//! Every lookup returns an explicit `Result`: a selector that matches
//! zero elements becomes a typed missing-field error naming the field
//! and the site strategy, never an index fault.

use scraper::{ElementRef, Html, Selector};

use crate::error::{AppError, Result};

/// Parse a CSS selector string.
pub fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}

/// First element matching `selector`, or a missing-field error.
pub fn select_first<'a>(
    doc: &'a Html,
    selector: &str,
    site: &'static str,
    field: &'static str,
) -> Result<ElementRef<'a>> {
    let sel = parse_selector(selector)?;
    doc.select(&sel)
        .next()
        .ok_or_else(|| AppError::missing_field(site, field))
}

/// Nth element (0-based) matching `selector`, or a missing-field error.
pub fn select_nth<'a>(
    doc: &'a Html,
    selector: &str,
    n: usize,
    site: &'static str,
    field: &'static str,
) -> Result<ElementRef<'a>> {
    let sel = parse_selector(selector)?;
    doc.select(&sel)
        .nth(n)
        .ok_or_else(|| AppError::missing_field(site, field))
}

/// Trimmed text content of the first element matching `selector`.
///
/// An element whose text trims to nothing counts as missing: required
/// fields are non-empty after trimming.
pub fn select_text(
    doc: &Html,
    selector: &str,
    site: &'static str,
    field: &'static str,
) -> Result<String> {
    let element = select_first(doc, selector, site, field)?;
    non_empty(element_text(&element), site, field)
}

/// Reject a trimmed-empty extraction result as a missing field.
pub fn non_empty(text: String, site: &'static str, field: &'static str) -> Result<String> {
    if text.is_empty() {
        return Err(AppError::missing_field(site, field));
    }
    Ok(text)
}

/// Outer HTML of the first element matching any of `selectors`, tried in
/// order. Sites with inconsistent markup across pages register an
/// ordered fallback chain here.
pub fn select_html_first(
    doc: &Html,
    selectors: &[&str],
    site: &'static str,
    field: &'static str,
) -> Result<String> {
    for selector in selectors {
        let sel = parse_selector(selector)?;
        if let Some(element) = doc.select(&sel).next() {
            return Ok(element.html());
        }
    }
    Err(AppError::missing_field(site, field))
}

/// Trimmed concatenated text of an element.
pub fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

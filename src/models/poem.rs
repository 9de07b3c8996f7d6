//! Poem record data structures.

use chrono::Local;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Classification tag applied to every extracted record.
pub const CATEGORY: &str = "fragment";

/// Format tag applied to every extracted record.
pub const FORMAT: &str = "verse";

/// The three site-extracted fields, before record assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoemFields {
    pub title: String,
    pub author: String,
    pub body: String,
}

/// Provenance of a record: where and when it was extracted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceRef {
    /// The exact input URL
    #[serde(rename = "URL")]
    pub url: String,

    /// Extraction date as YYYYMMDD (wall clock, not publication date)
    #[serde(rename = "Date")]
    pub date: String,
}

impl SourceRef {
    /// Build a provenance stamp for a URL using today's local date.
    pub fn now(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            date: date_stamp(),
        }
    }
}

/// A fully populated poem record, immutable once assembled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PoemRecord {
    #[serde(rename = "Title")]
    pub title: String,

    #[serde(rename = "By")]
    pub author: String,

    #[serde(rename = "Body")]
    pub body: String,

    /// Unique identifier, generated fresh per extraction
    #[serde(rename = "ID")]
    pub id: String,

    #[serde(rename = "Category")]
    pub category: String,

    #[serde(rename = "Format")]
    pub format: String,

    #[serde(rename = "Source")]
    pub source: SourceRef,
}

impl PoemRecord {
    /// Assemble a record from extracted fields and the source URL.
    pub fn assemble(fields: PoemFields, url: &str) -> Self {
        Self {
            title: fields.title,
            author: fields.author,
            body: fields.body,
            id: Uuid::new_v4().to_string(),
            category: CATEGORY.to_string(),
            format: FORMAT.to_string(),
            source: SourceRef::now(url),
        }
    }
}

/// An error entry emitted into the same document stream as records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorRecord {
    /// Reason the URL produced no record
    #[serde(rename = "__ERROR")]
    pub error: String,

    #[serde(rename = "Source")]
    pub source: SourceRef,
}

impl ErrorRecord {
    /// Build an error entry for a URL from a failure reason.
    pub fn new(url: &str, reason: impl ToString) -> Self {
        Self {
            error: reason.to_string(),
            source: SourceRef::now(url),
        }
    }
}

/// Today's local date formatted as YYYYMMDD.
pub fn date_stamp() -> String {
    Local::now().format("%Y%m%d").to_string()
}

// src/output/mod.rs

//! Document rendering for batch output.
//!
//! Successes and failures go into the same stream: one document per
//! input URL, concatenated in input order. Error documents carry the
//! `__ERROR` marker field so consumers can tell the two apart without
//! parsing exceptions.

use std::str::FromStr;

use crate::error::{AppError, Result};
use crate::pipeline::BatchEntry;

/// Supported output document formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "json" => Ok(OutputFormat::Json),
            other => Err(AppError::config(format!("Unknown output format: {other}"))),
        }
    }
}

/// Render batch entries as concatenated documents.
pub fn render(entries: &[BatchEntry], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => {
            let mut out = String::new();
            for entry in entries {
                out.push_str("---\n");
                out.push_str(&serde_yaml::to_string(entry)?);
            }
            Ok(out)
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(entries)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ErrorRecord, PoemFields, PoemRecord};

    fn sample_entries() -> Vec<BatchEntry> {
        let record = PoemRecord::assemble(
            PoemFields {
                title: "Dusk".to_string(),
                author: "J. Doe".to_string(),
                body: "the light goes down".to_string(),
            },
            "https://poets.org/poem/dusk",
        );
        let error = ErrorRecord::new(
            "https://unknown.example.com/poem",
            "No handler registered for URL: https://unknown.example.com/poem",
        );
        vec![BatchEntry::Record(record), BatchEntry::Error(error)]
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("yaml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_render_yaml_keeps_order_and_marks_errors() {
        let rendered = render(&sample_entries(), OutputFormat::Yaml).unwrap();

        assert!(rendered.starts_with("---\n"));
        assert_eq!(rendered.matches("---\n").count(), 2);

        // Success document comes first, error document second.
        let success_at = rendered.find("Title: Dusk").unwrap();
        let error_at = rendered.find("__ERROR:").unwrap();
        assert!(success_at < error_at);
        assert!(rendered.contains("URL: https://unknown.example.com/poem"));
        // Both documents carry the literal YYYYMMDD extraction date.
        assert_eq!(rendered.matches(&crate::models::date_stamp()).count(), 2);
    }

    #[test]
    fn test_render_json_round_trips() {
        let rendered = render(&sample_entries(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        let docs = value.as_array().unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0]["Title"], "Dusk");
        assert!(docs[1]["__ERROR"].is_string());
    }
}

// src/pipeline/grab.rs

//! Batch grab pipeline.
//!
//! Resolves each input URL to a site strategy, fetches and extracts the
//! poem, and yields one entry per URL in input order. Fetch and extract
//! run concurrently per URL; the order-preserving buffered stream keeps
//! output aligned with input.

use std::time::Duration;

use futures::stream::{self, StreamExt};
use reqwest::Client;
use scraper::Html;
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::models::{Config, ErrorRecord, PoemRecord};
use crate::sites::{self, SiteHandler};
use crate::text::TextConverter;
use crate::utils::http;

/// One output entry of a batch run.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum BatchEntry {
    Record(PoemRecord),
    Error(ErrorRecord),
}

impl BatchEntry {
    pub fn is_error(&self) -> bool {
        matches!(self, BatchEntry::Error(_))
    }

    /// The input URL this entry was produced for.
    pub fn url(&self) -> &str {
        match self {
            BatchEntry::Record(record) => &record.source.url,
            BatchEntry::Error(error) => &error.source.url,
        }
    }
}

/// A planned unit of work for one input URL.
enum Job {
    Extract {
        url: String,
        handler: &'static SiteHandler,
    },
    Unresolved {
        url: String,
    },
}

/// Resolve the whole batch up front; resolution is a pure lookup.
///
/// With `stop_on_unresolved` set, the first unresolved URL still yields
/// its error entry but the remaining URLs are dropped.
fn plan(urls: &[String], stop_on_unresolved: bool) -> Vec<Job> {
    let mut jobs = Vec::with_capacity(urls.len());
    for url in urls {
        match sites::resolve(url) {
            Ok(handler) => jobs.push(Job::Extract {
                url: url.clone(),
                handler,
            }),
            Err(error) => {
                log::warn!("{error}");
                jobs.push(Job::Unresolved { url: url.clone() });
                if stop_on_unresolved {
                    break;
                }
            }
        }
    }
    jobs
}

/// Extract a record from already-fetched HTML for `url`.
///
/// Entry point for callers that hold page content themselves; the batch
/// runner goes through the same resolve and extract steps.
pub fn extract_record(url: &str, doc: &Html, converter: &TextConverter) -> Result<PoemRecord> {
    let handler = sites::resolve(url)?;
    let fields = handler.site.extract(doc, converter)?;
    Ok(PoemRecord::assemble(fields, url))
}

/// Run a batch of URLs, preserving input order in the output.
pub async fn run_batch(config: &Config, client: &Client, urls: &[String]) -> Vec<BatchEntry> {
    let converter = TextConverter::new(&config.text);
    let concurrency = config.fetch.max_concurrent.max(1);
    let delay = Duration::from_millis(config.fetch.request_delay_ms);

    let jobs = plan(urls, config.batch.stop_on_unresolved);

    let mut entries = Vec::with_capacity(jobs.len());
    let mut job_stream = stream::iter(jobs)
        .map(|job| {
            let converter = converter.clone();
            async move { process(client, job, &converter).await }
        })
        .buffered(concurrency);

    while let Some(entry) = job_stream.next().await {
        match &entry {
            BatchEntry::Record(record) => {
                log::info!("Extracted \"{}\" from {}", record.title, record.source.url);
            }
            BatchEntry::Error(error) => {
                log::warn!("{} -> {}", error.source.url, error.error);
            }
        }
        entries.push(entry);

        if delay.as_millis() > 0 {
            tokio::time::sleep(delay).await;
        }
    }
    entries
}

/// Process one planned job into its output entry.
async fn process(client: &Client, job: Job, converter: &TextConverter) -> BatchEntry {
    match job {
        Job::Unresolved { url } => {
            let reason = AppError::unresolved(&url);
            BatchEntry::Error(ErrorRecord::new(&url, reason))
        }
        Job::Extract { url, handler } => {
            let doc = match http::fetch_page(client, &url).await {
                Ok(doc) => doc,
                Err(error) => return BatchEntry::Error(ErrorRecord::new(&url, error)),
            };
            match handler.site.extract(&doc, converter) {
                Ok(fields) => BatchEntry::Record(PoemRecord::assemble(fields, &url)),
                Err(error) => BatchEntry::Error(ErrorRecord::new(&url, error)),
            }
        }
    }
}

// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use scraper::Html;
use url::Url;

use crate::error::Result;
use crate::models::FetchConfig;

/// Create a configured asynchronous HTTP client.
pub fn create_client(config: &FetchConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// Fetch a page and parse it as HTML.
///
/// The URL is checked for well-formedness before the request goes out so
/// a malformed input fails with a parse error, not a request error.
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<Html> {
    Url::parse(url)?;
    let text = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    Ok(Html::parse_document(&text))
}

//! Fetching dictionary pages.
//!
//! [`fetch`] builds the page URL from a base and a word, performs one GET bounded
//! by a timeout, and parses a `200 OK` body into a [`Document`]. The response body
//! is always read to the end, including on failure paths, and decoded with the
//! charset the server declares.

use reqwest::header::ACCEPT;
use reqwest::{Response, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::document::Document;
use crate::utils::HttpClient;

/// Errors that can occur while fetching a page
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request URL or client could not be built
    #[error("Invalid request: {0}")]
    RequestBuild(String),

    /// Connection failure, timeout or cancellation
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with something other than 200 OK
    #[error("Unexpected status: {0}")]
    UnexpectedStatus(StatusCode),

    /// The body could not be read as an HTML page
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Network(err.to_string())
    }
}

/// Build the page URL for `word`. The word is appended as-is; only the
/// escaping the URL parser applies is performed.
pub fn request_url(base_url: &str, word: &str) -> Result<Url, FetchError> {
    let raw = format!("{}{}", base_url, word);
    Url::parse(&raw).map_err(|e| FetchError::RequestBuild(format!("{}: {}", raw, e)))
}

/// Fetch and parse the page for `word`.
///
/// The whole exchange (connect, headers, body) must finish within `timeout`.
/// Dropping the returned future cancels the request.
pub async fn fetch(
    client: &HttpClient,
    base_url: &str,
    word: &str,
    timeout: Duration,
) -> Result<Document, FetchError> {
    let url = request_url(base_url, word)?;
    debug!(%url, "Fetching page");

    match tokio::time::timeout(timeout, fetch_url(client, url)).await {
        Ok(result) => result,
        Err(_) => Err(FetchError::Network(format!(
            "request timed out after {:?}",
            timeout
        ))),
    }
}

async fn fetch_url(client: &HttpClient, url: Url) -> Result<Document, FetchError> {
    let response = client
        .client()
        .get(url)
        .header(ACCEPT, "text/html")
        .send()
        .await?;

    let status = response.status();
    debug!(%status, "Received response");

    if status != StatusCode::OK {
        drain(response).await;
        return Err(FetchError::UnexpectedStatus(status));
    }

    // Decodes with the Content-Type charset, replacing malformed sequences
    let html = response
        .text()
        .await
        .map_err(|e| FetchError::Parse(format!("Failed to read HTML: {}", e)))?;

    Ok(Document::parse(&html))
}

/// Read and discard the rest of a response body.
async fn drain(response: Response) {
    if let Err(e) = response.bytes().await {
        warn!(error = %e, "Failed to drain response body");
    }
}

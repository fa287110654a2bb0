//! HTTP article source.
//!
//! Fetches each document's page with a blocking GET and runs readability
//! extraction on the response body. Every failure mode (connect error,
//! non-success status, extraction miss) surfaces as a per-document
//! extraction error, so one dead URL never aborts the batch.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::document::Document;
use crate::error::{ProsemeterError, Result};
use crate::extract::readability::extract_article;
use crate::extract::ArticleSource;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// An [`ArticleSource`] that fetches pages over HTTP.
#[derive(Clone, Debug)]
pub struct HttpArticleSource {
    client: Client,
}

impl HttpArticleSource {
    /// Create a source with the default timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a source with a custom request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("prosemeter/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ProsemeterError::config(format!("cannot build HTTP client: {e}")))?;

        Ok(HttpArticleSource { client })
    }

    /// Fetch raw HTML for one URL.
    fn fetch_html(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| ProsemeterError::extraction(format!("GET {url} failed: {e}")))?;

        let response = response
            .error_for_status()
            .map_err(|e| ProsemeterError::extraction(format!("GET {url} failed: {e}")))?;

        response
            .text()
            .map_err(|e| ProsemeterError::extraction(format!("reading body of {url} failed: {e}")))
    }
}

impl ArticleSource for HttpArticleSource {
    fn fetch(&self, id: &str, url: &str) -> Result<Document> {
        let html = self.fetch_html(url)?;
        let (title, body) = extract_article(&html, Some(url))?;
        Ok(Document::new(id, title, body))
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_name() {
        let source = HttpArticleSource::new().unwrap();
        assert_eq!(source.name(), "http");
    }

    #[test]
    fn test_unreachable_url_is_extraction_error() {
        let source = HttpArticleSource::with_timeout(Duration::from_millis(200)).unwrap();
        let err = source
            .fetch("doc1", "http://127.0.0.1:9/unreachable")
            .unwrap_err();
        assert!(!err.is_fatal());
    }
}

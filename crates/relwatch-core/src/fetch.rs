use async_trait::async_trait;
use log::debug;
use reqwest::header;
use thiserror::Error;

const ERROR_SNIPPET_CHARS: usize = 160;

/// Retrieves a document as text. `None` covers every kind of failure.
#[async_trait]
pub trait StringFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Option<String>;
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to request {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("request to {url} failed with HTTP {status}{body_snippet}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        body_snippet: String,
    },
    #[error("failed to read response from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// [`StringFetcher`] backed by a shared `reqwest` client.
///
/// Timeouts, proxies and the user agent are whatever the client was built
/// with.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    #[must_use]
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// GET `url` and return the response body.
    ///
    /// # Errors
    /// Returns an error when the request cannot be sent, the server answers
    /// with a non-success status, or the body cannot be read.
    pub async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/vnd.github+json")
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body_snippet = response
                .text()
                .await
                .ok()
                .map(|body| response_snippet(&body, ERROR_SNIPPET_CHARS))
                .unwrap_or_default();
            return Err(FetchError::HttpStatus {
                url: url.to_string(),
                status,
                body_snippet,
            });
        }

        response.text().await.map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait]
impl StringFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Option<String> {
        match self.fetch_text(url).await {
            Ok(body) => Some(body),
            Err(e) => {
                debug!("Release fetch failed: {e}");
                None
            }
        }
    }
}

fn response_snippet(body: &str, max_chars: usize) -> String {
    let snippet: String = body.chars().take(max_chars).collect();
    if snippet.is_empty() {
        String::new()
    } else {
        format!(": {snippet}")
    }
}

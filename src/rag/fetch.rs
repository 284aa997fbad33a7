//! Fetching of linked pages.
//!
//! The engine only sees the `PageFetcher` trait, so hosts can route requests
//! through their own network layer and tests can serve canned HTML.

use std::time::Duration;

use async_trait::async_trait;

use crate::core::config::FetchSettings;
use crate::core::errors::RagError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub url: String,
    pub html: String,
}

#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches one page. Non-success statuses are errors.
    async fn fetch(&self, url: &str) -> Result<FetchedPage, RagError>;
}

/// `reqwest`-backed fetcher with a client-level timeout and a body size cap.
pub struct HttpPageFetcher {
    client: reqwest::Client,
    max_bytes: u64,
}

impl HttpPageFetcher {
    pub fn new(settings: &FetchSettings) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .user_agent(settings.user_agent.clone())
            .build()
            .unwrap_or_else(|err| {
                tracing::warn!("Falling back to default HTTP client: {}", err);
                reqwest::Client::new()
            });

        Self {
            client,
            max_bytes: settings.max_bytes,
        }
    }
}

impl Default for HttpPageFetcher {
    fn default() -> Self {
        Self::new(&FetchSettings::default())
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, RagError> {
        let mut response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| RagError::fetch(url, err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RagError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        if let Some(length) = response.content_length() {
            if length > self.max_bytes {
                return Err(RagError::fetch(
                    url,
                    format!("body of {} bytes exceeds limit of {}", length, self.max_bytes),
                ));
            }
        }

        // Content-Length may be absent; enforce the cap while reading.
        let mut body: Vec<u8> = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|err| RagError::fetch(url, err))?
        {
            if body.len() as u64 + chunk.len() as u64 > self.max_bytes {
                return Err(RagError::fetch(
                    url,
                    format!("body exceeds limit of {} bytes", self.max_bytes),
                ));
            }
            body.extend_from_slice(&chunk);
        }
        let html = String::from_utf8_lossy(&body).into_owned();

        Ok(FetchedPage {
            url: url.to_string(),
            html,
        })
    }
}

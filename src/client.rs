// ==============================================================================
// client.rs - PanelApp Endpoint Fetcher
// ==============================================================================
// Description: HTTP GET with JSON decoding and retry on non-success status
// Created: 2026-10-19
// Modified: 2026-10-19
// Version: 1.0.0
// ==============================================================================

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::{Result, ScraperError};

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default number of retries after the first failed attempt
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Raw HTTP response: status plus body text
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Performs a single GET request
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<HttpResponse>;
}

/// `reqwest` transport used against the live API
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> std::result::Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        let to_transport = |source: reqwest::Error| ScraperError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(to_transport)?;
        let status = response.status();
        let body = response.text().await.map_err(to_transport)?;

        Ok(HttpResponse { status, body })
    }
}

/// Fetches JSON documents, retrying non-success responses without delay
pub struct EndpointFetcher<T> {
    transport: T,
    max_retries: u32,
}

impl<T: Transport> EndpointFetcher<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// GET `url` and parse the body as JSON
    ///
    /// # Returns
    /// * `Ok(Value)` - Parsed body of the first successful response
    /// * `Err(ScraperError::Http)` - Still failing after `max_retries` retries
    /// * `Err(ScraperError::Transport)` - Connection error or timeout (not retried)
    /// * `Err(ScraperError::Json)` - Successful response with an invalid body
    pub async fn fetch_json(&self, url: &str) -> Result<Value> {
        let mut attempt = 0;

        loop {
            let response = self.transport.get(url).await?;

            if response.status.is_success() {
                debug!("GET {} -> {}", url, response.status);
                return Ok(serde_json::from_str(&response.body)?);
            }

            if attempt >= self.max_retries {
                return Err(ScraperError::Http {
                    status: response.status,
                    url: url.to_string(),
                });
            }

            attempt += 1;
            warn!(
                "Retry {}/{} for {} (status {})",
                attempt, self.max_retries, url, response.status
            );
        }
    }
}

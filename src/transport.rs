//! HTTP transport for the upstream forecast endpoint
//!
//! The exchange is a single best-effort POST of a JSON body. The [`Transport`]
//! trait keeps the HTTP stack injectable; [`HttpTransport`] is the
//! reqwest-backed implementation used in production.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use thiserror::Error;
use tracing::debug;

use crate::config::ForecastConfig;

/// Errors produced by the transport layer
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP request failed (connection, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status
    #[error("unexpected status code {0}")]
    Status(StatusCode),

    /// The endpoint answered with an empty body
    #[error("empty response body")]
    EmptyBody,
}

/// A one-shot exchange with the upstream forecast endpoint
///
/// Implementations send the given JSON body and return the raw response
/// bytes. They must be safe to share across concurrent fetches.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, body: String) -> Result<Vec<u8>, TransportError>;
}

/// reqwest-backed transport posting to a fixed endpoint URL
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint_url: String,
}

impl HttpTransport {
    /// Create a transport honoring the configured endpoint and timeout
    pub fn new(config: &ForecastConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint_url: config.endpoint_url.clone(),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, body: String) -> Result<Vec<u8>, TransportError> {
        debug!(endpoint = %self.endpoint_url, "sending forecast request");

        // The upstream expects a plain one-shot exchange, no keep-alive.
        let response = self
            .client
            .post(&self.endpoint_url)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::CONNECTION, "close")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status));
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(TransportError::EmptyBody);
        }

        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_creation() {
        let transport = HttpTransport::new(&ForecastConfig::default());
        assert!(transport.is_ok());
    }

    #[test]
    fn test_transport_error_display() {
        let err = TransportError::Status(StatusCode::BAD_GATEWAY);
        assert!(err.to_string().contains("502"));

        let err = TransportError::EmptyBody;
        assert!(err.to_string().contains("empty"));
    }
}

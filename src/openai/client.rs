// OpenAI chat-completions client

use super::models::ChatCompletionRequest;
use crate::config::OpenAiConfig;
use crate::error::{RelayError, Result};
use bytes::Bytes;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error};

/// Client for the OpenAI chat-completions API.
///
/// Holds the bearer credential for the process lifetime; the credential is
/// injected through [`OpenAiConfig`] rather than read from ambient state so
/// tests can override it per instance.
pub struct OpenAiClient {
    http_client: Client,
    config: OpenAiConfig,
}

impl OpenAiClient {
    /// Create a new client with a pooled, timeout-bounded HTTP transport.
    pub fn new(config: &OpenAiConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(10))
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Some(Duration::from_secs(60)))
            .tcp_nodelay(true)
            .use_rustls_tls()
            .build()
            .map_err(|e| RelayError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        debug!("Created HTTP client with connection pooling and keep-alive");

        Ok(Self {
            http_client,
            config: config.clone(),
        })
    }

    /// Get the configured API base URL.
    pub fn base_url(&self) -> &str {
        &self.config.api_base_url
    }

    /// Send an image to the chat-completions API and return the raw success
    /// body, unparsed, so the caller can relay it byte-for-byte.
    ///
    /// Any non-success status and any transport failure (DNS, refused
    /// connection, timeout) collapse into [`RelayError::Upstream`]; the
    /// upstream error body is logged but never returned.
    pub async fn describe_image(&self, base64_image: &str) -> Result<Bytes> {
        let url = format!("{}/chat/completions", self.config.api_base_url);
        debug!("Calling chat-completions API for model: {}", self.config.model);

        let request = ChatCompletionRequest::describe_image(
            &self.config.model,
            self.config.max_tokens,
            base64_image,
        );

        let response = self
            .http_client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| RelayError::Upstream(format!("HTTP error: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(
                "OpenAI API error: HTTP {} - Response body: {}",
                status, error_text
            );
            return Err(RelayError::Upstream(format!("HTTP {}", status)));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| RelayError::Upstream(format!("Failed to read response body: {}", e)))?;

        debug!("Received {} byte completion response", body.len());
        Ok(body)
    }
}

//! HTTP client for a running Quill server
//!
//! A thin reqwest wrapper used by the `quill` binary and usable as a
//! library. It treats the server's 200 body as JSON with an `output`
//! field and hands back the raw value, so callers decide how to display
//! it.

use std::time::Duration;

/// Generous ceiling for one prediction; a pipeline run makes two model
/// calls plus tool traffic.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

/// Failures when talking to the server.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport failure or non-success HTTP status
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// A 2xx response whose body is not the expected envelope; carries the
    /// raw body for display
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}

/// Client for one Quill server.
pub struct QuillClient {
    http: reqwest::Client,
    base_url: String,
}

impl QuillClient {
    /// Create a client for the server at `base_url`.
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The server base URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Run one query through the server's pipeline.
    ///
    /// Returns the `output` value from the response envelope. Non-2xx
    /// statuses are [`ClientError::Request`]; a 2xx body that is not JSON
    /// or lacks `output` is [`ClientError::UnexpectedResponse`].
    pub async fn predict(&self, query: &str) -> Result<serde_json::Value, ClientError> {
        let url = format!("{}/predict", self.base_url);

        let response = self
            .http
            .post(&url)
            .timeout(REQUEST_TIMEOUT)
            .json(&serde_json::json!({ "query": query }))
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;

        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(|_| ClientError::UnexpectedResponse(body.clone()))?;

        value
            .get("output")
            .cloned()
            .ok_or(ClientError::UnexpectedResponse(body))
    }
}

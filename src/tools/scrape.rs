//! Web scrape adapter backed by a FireCrawl-style API

use crate::config::WebScrapeConfig;
use crate::tools::registry::{Tool, ToolError};
use async_trait::async_trait;
use std::time::Duration;

/// Scrapes a web page for the research stage.
///
/// The query must be a direct URL; the adapter POSTs it to a
/// FireCrawl-compatible scrape endpoint and returns the page as markdown.
/// The credential is resolved once at construction, so a missing key is a
/// cheap per-call error that never touches the network.
pub struct WebScrapeTool {
    api_key: Option<String>,
    api_key_env: String,
    endpoint: String,
    http: reqwest::Client,
    timeout: Duration,
}

impl WebScrapeTool {
    /// Create the adapter with an already-resolved credential.
    pub fn new(api_key: Option<String>, api_key_env: String, endpoint: String, timeout_secs: u64) -> Self {
        Self {
            api_key,
            api_key_env,
            endpoint,
            http: reqwest::Client::new(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Create the adapter from configuration, reading the credential from
    /// the environment variable the config names.
    pub fn from_config(config: &WebScrapeConfig) -> Self {
        Self::new(
            std::env::var(&config.api_key_env).ok(),
            config.api_key_env.clone(),
            config.endpoint.clone(),
            config.timeout_secs,
        )
    }
}

/// Cap payload snippets carried in errors at a readable length.
fn snippet(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

#[async_trait]
impl Tool for WebScrapeTool {
    fn name(&self) -> &str {
        "web_scrape"
    }

    fn description(&self) -> &str {
        "A tool to search the web and scrape website content using the FireCrawl API. \
         Useful for getting up-to-date information."
    }

    async fn invoke(&self, query: &str) -> std::result::Result<String, ToolError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ToolError::MissingCredential(self.api_key_env.clone()))?;

        if !query.starts_with("http") {
            return Err(ToolError::ExpectsUrl);
        }

        let response = self
            .http
            .post(&self.endpoint)
            .timeout(self.timeout)
            .bearer_auth(api_key)
            .json(&serde_json::json!({ "url": query }))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ToolError::Timeout(self.timeout.as_secs())
                } else {
                    ToolError::Http(e)
                }
            })?;

        let response = response.error_for_status().map_err(ToolError::Http)?;
        let body = response.text().await.map_err(ToolError::Http)?;

        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(|_| ToolError::UnexpectedPayload(snippet(&body)))?;

        match value.pointer("/data/markdown").and_then(|v| v.as_str()) {
            Some(markdown) => Ok(markdown.to_string()),
            None => Ok("No markdown content found.".to_string()),
        }
    }
}

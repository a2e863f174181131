//! Ollama provider for local inference

use crate::llm::client::LLMClient;
use crate::types::{AppError, Result};
use async_trait::async_trait;
use ollama_rs::{
    Ollama,
    generation::chat::{ChatMessage, request::ChatMessageRequest},
};

/// Client for a local or remote Ollama server.
pub struct OllamaClient {
    client: Ollama,
    model: String,
}

/// Split a base URL into the scheme-qualified host and the port.
///
/// `ollama_rs::Ollama::new` wants the host with its scheme and the port
/// separately, so `http://localhost:11434` becomes
/// (`http://localhost`, 11434). A missing scheme defaults to http and a
/// missing port to Ollama's default 11434.
fn split_host_port(base_url: &str) -> (String, u16) {
    let (scheme, rest) = match base_url.split_once("://") {
        Some((scheme, rest)) => (scheme, rest),
        None => ("http", base_url),
    };

    let rest = rest.trim_end_matches('/');
    let (host, port) = match rest.rsplit_once(':') {
        Some((host, port)) => (host, port.parse().unwrap_or(11434)),
        None => (rest, 11434),
    };

    (format!("{}://{}", scheme, host), port)
}

impl OllamaClient {
    /// Create a client for the Ollama server at `base_url`.
    pub fn new(base_url: &str, model: String) -> Self {
        let (host, port) = split_host_port(base_url);
        let client = Ollama::new(host, port);

        Self { client, model }
    }
}

#[async_trait]
impl LLMClient for OllamaClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let messages = vec![ChatMessage::user(prompt.to_string())];

        let request = ChatMessageRequest::new(self.model.clone(), messages);

        let response = self
            .client
            .send_chat_messages(request)
            .await
            .map_err(|e| AppError::LLM(format!("Ollama error: {}", e)))?;

        Ok(response.message.content)
    }

    async fn generate_with_system(&self, system: &str, prompt: &str) -> Result<String> {
        let messages = vec![
            ChatMessage::system(system.to_string()),
            ChatMessage::user(prompt.to_string()),
        ];

        let request = ChatMessageRequest::new(self.model.clone(), messages);

        let response = self
            .client
            .send_chat_messages(request)
            .await
            .map_err(|e| AppError::LLM(format!("Ollama error: {}", e)))?;

        Ok(response.message.content)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

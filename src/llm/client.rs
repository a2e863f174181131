//! LLM client abstraction and provider selection
//!
//! Both pipeline agents talk to the model through [`LLMClient`], so the
//! pipeline is provider-agnostic and tests can substitute a scripted
//! implementation. [`Provider`] is the resolved runtime selection: it is
//! built from the configuration once at startup, with secrets already
//! pulled out of the environment.

use crate::config::ProviderConfig;
use crate::types::{AppError, Result};
use async_trait::async_trait;

/// Generic LLM client trait for provider abstraction
#[async_trait]
pub trait LLMClient: Send + Sync {
    /// Generate a completion from a bare prompt
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Generate with a system prompt establishing the persona
    async fn generate_with_system(&self, system: &str, prompt: &str) -> Result<String>;

    /// Get the model name/identifier
    fn model_name(&self) -> &str;
}

/// Resolved provider selection for runtime client creation.
///
/// Unlike [`ProviderConfig`], this carries the actual API key rather than
/// the name of an environment variable. Resolution happens once, in
/// [`Provider::from_config`], so a missing key surfaces at startup instead
/// of on the first request.
#[derive(Debug, Clone)]
pub enum Provider {
    /// Ollama local LLM provider
    Ollama {
        /// Base URL of the Ollama server, scheme included
        base_url: String,
        /// Model tag to request
        model: String,
    },

    /// OpenAI API provider (or any OpenAI-compatible endpoint)
    OpenAI {
        /// Resolved API key
        api_key: String,
        /// API base URL
        api_base: String,
        /// Model name to request
        model: String,
    },
}

impl Provider {
    /// Resolve a provider from its configuration, reading any referenced
    /// environment variables.
    pub fn from_config(config: &ProviderConfig) -> Result<Self> {
        match config {
            ProviderConfig::Ollama { base_url, model } => Ok(Provider::Ollama {
                base_url: base_url.clone(),
                model: model.clone(),
            }),
            ProviderConfig::OpenAI {
                api_key_env,
                api_base,
                model,
            } => {
                let api_key = std::env::var(api_key_env).map_err(|_| {
                    AppError::Config(format!(
                        "Environment variable '{}' required by the openai provider is not set",
                        api_key_env
                    ))
                })?;
                Ok(Provider::OpenAI {
                    api_key,
                    api_base: api_base.clone(),
                    model: model.clone(),
                })
            }
        }
    }

    /// Create a client instance for this provider.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the matching cargo feature was
    /// not compiled in.
    pub fn create_client(&self) -> Result<Box<dyn LLMClient>> {
        match self {
            #[cfg(feature = "ollama")]
            Provider::Ollama { base_url, model } => Ok(Box::new(
                super::ollama::OllamaClient::new(base_url, model.clone()),
            )),

            #[cfg(not(feature = "ollama"))]
            Provider::Ollama { .. } => Err(AppError::Config(
                "Provider 'ollama' requires this build to enable the 'ollama' feature".to_string(),
            )),

            #[cfg(feature = "openai")]
            Provider::OpenAI {
                api_key,
                api_base,
                model,
            } => Ok(Box::new(super::openai::OpenAIClient::new(
                api_key.clone(),
                api_base.clone(),
                model.clone(),
            ))),

            #[cfg(not(feature = "openai"))]
            Provider::OpenAI { .. } => Err(AppError::Config(
                "Provider 'openai' requires this build to enable the 'openai' feature".to_string(),
            )),
        }
    }

    /// Get a human-readable name for this provider
    pub fn name(&self) -> &'static str {
        match self {
            Provider::Ollama { .. } => "Ollama",
            Provider::OpenAI { .. } => "OpenAI",
        }
    }

    /// The model this provider will serve
    pub fn model(&self) -> &str {
        match self {
            Provider::Ollama { model, .. } => model,
            Provider::OpenAI { model, .. } => model,
        }
    }
}

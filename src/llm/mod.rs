//! LLM Provider Clients and Abstractions
//!
//! This module provides a unified interface for talking to the Large
//! Language Model that powers both pipeline agents. Provider-specific
//! implementations hide behind [`LLMClient`], so the rest of the
//! application never cares which backend is serving completions.
//!
//! # Supported Providers
//!
//! Enable providers via Cargo features:
//! - `ollama` - Local Ollama server (default)
//! - `openai` - OpenAI API or any OpenAI-compatible endpoint
//!
//! # Example
//!
//! ```ignore
//! use quill::llm::Provider;
//!
//! let provider = Provider::from_config(&config.provider)?;
//! let client = provider.create_client()?;
//!
//! let response = client.generate("What is 2+2?").await?;
//! println!("{}", response);
//! ```

/// Core LLM client trait and provider selection.
pub mod client;

#[cfg(feature = "ollama")]
pub mod ollama;

#[cfg(feature = "openai")]
pub mod openai;

pub use client::{LLMClient, Provider};

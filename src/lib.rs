//! # Quill
//!
//! A minimal agentic research server. Every query runs through a fixed
//! two-agent pipeline: a researcher backed by pluggable tool adapters
//! gathers and summarizes information, and a writer turns the findings
//! into a final answer. The pipeline is served over HTTP and driven by a
//! one-shot CLI client.
//!
//! ## Overview
//!
//! Quill can be used in two ways:
//!
//! 1. **As a server** - Run the `quill-server` binary and query it with
//!    the `quill` client binary (or plain HTTP).
//! 2. **As a library** - Import the pipeline, agents, and tool adapters
//!    into your own Rust project.
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust,ignore
//! use quill::{AppState, QuillConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = QuillConfig::load("quill.toml")?;
//!     let state = AppState::initialize(config)?;
//!
//!     let output = state.pipeline.run("What is CrewAI?").await?;
//!     println!("{}", output.answer);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `ollama` | Ollama local inference (default) |
//! | `openai` | OpenAI API support |
//! | `all-providers` | Both providers |
//!
//! ## Modules
//!
//! - [`agents`] - Persona-driven agents
//! - [`api`] - REST API handlers and routes
//! - [`client`] - HTTP client for a running server
//! - [`config`] - TOML configuration
//! - [`llm`] - LLM provider clients
//! - [`pipeline`] - The research → writing orchestration
//! - [`tools`] - Tool adapters and registry
//! - [`types`] - Common types and error handling
//!
//! ## Error Model
//!
//! Tool failures are recoverable: they are rendered into the research
//! transcript and the run continues. Model failures abort the run and
//! surface as HTTP 500s. A missing or blank query is a 400.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// Persona-driven agents for the pipeline stages.
pub mod agents;
/// HTTP API handlers and routes.
pub mod api;
/// CLI parsing and scaffolding for the server binary.
pub mod cli;
/// HTTP client for a running Quill server.
pub mod client;
/// TOML configuration loading and validation.
pub mod config;
/// LLM provider clients and abstractions.
pub mod llm;
/// The research → writing pipeline.
pub mod pipeline;
/// Tool adapters and the ordered registry.
pub mod tools;
/// Core types (requests, responses, errors).
pub mod types;

// Re-export commonly used types
pub use client::{ClientError, QuillClient};
pub use config::QuillConfig;
pub use llm::{LLMClient, Provider};
pub use pipeline::{Pipeline, PipelineOutput, StageRecord};
pub use tools::{Tool, ToolError, ToolRegistry};
pub use types::{AppError, Result};

use crate::agents::Agent;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration
    pub config: Arc<QuillConfig>,
    /// The shared research pipeline
    pub pipeline: Arc<Pipeline>,
}

impl AppState {
    /// Build the application state from configuration.
    ///
    /// Runs once at startup: resolves the provider (including any secrets
    /// from the environment), creates the LLM client, both agents, and the
    /// tool registry. Everything is immutable and `Arc`-shared afterwards,
    /// so one state serves concurrent requests.
    pub fn initialize(config: QuillConfig) -> Result<Self> {
        let provider = Provider::from_config(&config.provider)?;
        tracing::info!(
            provider = provider.name(),
            model = provider.model(),
            "Creating LLM client"
        );

        let llm: Arc<dyn LLMClient> = Arc::from(provider.create_client()?);

        let researcher = Agent::from_persona(&config.agents.researcher, Arc::clone(&llm));
        let writer = Agent::from_persona(&config.agents.writer, Arc::clone(&llm));

        let tools = ToolRegistry::from_config(&config.tools);
        tracing::info!(tools = ?tools.tool_names(), "Tool registry assembled");

        let pipeline = Pipeline::new(researcher, writer, tools);

        Ok(Self {
            config: Arc::new(config),
            pipeline: Arc::new(pipeline),
        })
    }
}

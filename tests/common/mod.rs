//! Shared test fixtures: a scriptable mock LLM client and helpers for
//! assembling a pipeline or app state around it without touching the network.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use quill::AppState;
use quill::agents::Agent;
use quill::config::QuillConfig;
use quill::llm::LLMClient;
use quill::pipeline::Pipeline;
use quill::tools::{KnowledgeBaseTool, ToolRegistry};
use quill::types::{AppError, Result};

/// Mock LLM client for testing with configurable responses
pub struct MockLLMClient {
    responses: Mutex<VecDeque<String>>,
    fallback: String,
    should_fail: bool,
}

impl MockLLMClient {
    /// Always replies with `response`.
    pub fn new(response: &str) -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            fallback: response.to_string(),
            should_fail: false,
        }
    }

    /// Replies with the scripted responses in order, then repeats the last
    /// one. Useful for giving the researcher and writer distinct replies.
    pub fn scripted(responses: &[&str]) -> Self {
        let fallback = responses.last().map(|s| s.to_string()).unwrap_or_default();
        Self {
            responses: Mutex::new(responses.iter().map(|s| s.to_string()).collect()),
            fallback,
            should_fail: false,
        }
    }

    /// Fails every call with an LLM error.
    pub fn failing() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            fallback: String::new(),
            should_fail: true,
        }
    }

    fn next_response(&self) -> Result<String> {
        if self.should_fail {
            return Err(AppError::LLM("Mock LLM failure".to_string()));
        }
        let mut queue = self.responses.lock().unwrap();
        Ok(queue.pop_front().unwrap_or_else(|| self.fallback.clone()))
    }
}

#[async_trait]
impl LLMClient for MockLLMClient {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        self.next_response()
    }

    async fn generate_with_system(&self, _system: &str, _prompt: &str) -> Result<String> {
        self.next_response()
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

/// Researcher and writer agents built from the default personas, sharing
/// one mock client.
pub fn mock_agents(llm: MockLLMClient) -> (Agent, Agent) {
    let llm: Arc<dyn LLMClient> = Arc::new(llm);
    let config = QuillConfig::default();
    let researcher = Agent::from_persona(&config.agents.researcher, Arc::clone(&llm));
    let writer = Agent::from_persona(&config.agents.writer, Arc::clone(&llm));
    (researcher, writer)
}

/// A pipeline over the mock client with the deterministic knowledge base
/// as its only tool.
pub fn mock_pipeline(llm: MockLLMClient) -> Pipeline {
    let (researcher, writer) = mock_agents(llm);
    let mut tools = ToolRegistry::new();
    tools.register(Arc::new(KnowledgeBaseTool::new()));
    Pipeline::new(researcher, writer, tools)
}

/// A pipeline over the mock client with a caller-supplied tool registry.
pub fn mock_pipeline_with_tools(llm: MockLLMClient, tools: ToolRegistry) -> Pipeline {
    let (researcher, writer) = mock_agents(llm);
    Pipeline::new(researcher, writer, tools)
}

/// App state wired to the mock client, for in-process API tests.
pub fn mock_state(llm: MockLLMClient) -> AppState {
    AppState {
        config: Arc::new(QuillConfig::default()),
        pipeline: Arc::new(mock_pipeline(llm)),
    }
}

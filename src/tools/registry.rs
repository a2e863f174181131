use async_trait::async_trait;
use std::sync::Arc;

use crate::config::ToolsConfig;

/// Failure modes at the tool boundary.
///
/// Tool failures are recoverable: the research stage renders them into the
/// tool transcript instead of aborting the run. The variants stay typed so
/// callers and tests can match on the cause.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// The credential named by config was not present at startup
    #[error("{0} environment variable not set")]
    MissingCredential(String),

    /// The query is not the direct URL this adapter expects
    #[error("expected a direct URL as the query")]
    ExpectsUrl,

    /// The upstream call exceeded the configured timeout
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// Transport failure or non-success HTTP status
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The upstream answered 2xx with a body we cannot interpret
    #[error("unexpected response payload: {0}")]
    UnexpectedPayload(String),
}

/// A unit of external capability available to the research stage.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Stable identifier, used in transcripts and logs
    fn name(&self) -> &str;

    /// What the tool does, phrased for the model
    fn description(&self) -> &str;

    /// Run the tool against the user's query.
    ///
    /// Never panics; every failure is a [`ToolError`] variant.
    async fn invoke(&self, query: &str) -> std::result::Result<String, ToolError>;
}

/// Outcome of one tool invocation during a pipeline run.
#[derive(Debug)]
pub struct ToolReport {
    /// Name of the tool that produced this report
    pub tool: String,
    /// The tool's output, or the typed failure
    pub outcome: std::result::Result<String, ToolError>,
}

impl ToolReport {
    /// Render the outcome as transcript text.
    ///
    /// Failures become a fixed `Error: ...` line so the researcher sees
    /// what was unavailable without the run aborting.
    pub fn render(&self) -> String {
        match &self.outcome {
            Ok(output) => output.clone(),
            Err(e) => format!("Error: {}", e),
        }
    }
}

/// Insertion-ordered registry of tool adapters.
///
/// Order matters: `gather` invokes tools in registration order, which keeps
/// the research prompt deterministic for a given configuration.
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Build the registry from configuration, registering only enabled
    /// adapters. Credentials are resolved from the environment here, once.
    pub fn from_config(config: &ToolsConfig) -> Self {
        let mut registry = Self::new();

        if config.web_scrape.enabled {
            registry.register(Arc::new(crate::tools::scrape::WebScrapeTool::from_config(
                &config.web_scrape,
            )));
        }

        if config.knowledge_base.enabled {
            registry.register(Arc::new(crate::tools::knowledge::KnowledgeBaseTool::new()));
        }

        registry
    }

    /// Register a tool at the end of the invocation order.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.push(tool);
    }

    /// Invoke every registered tool sequentially against the query.
    ///
    /// Always returns one report per tool; failures are logged at warn
    /// level and carried in the report rather than aborting the batch.
    pub async fn gather(&self, query: &str) -> Vec<ToolReport> {
        let mut reports = Vec::with_capacity(self.tools.len());

        for tool in &self.tools {
            let outcome = tool.invoke(query).await;
            if let Err(e) = &outcome {
                tracing::warn!(tool = tool.name(), error = %e, "Tool invocation failed");
            }
            reports.push(ToolReport {
                tool: tool.name().to_string(),
                outcome,
            });
        }

        reports
    }

    /// Names of all registered tools, in registration order
    pub fn tool_names(&self) -> Vec<String> {
        self.tools.iter().map(|t| t.name().to_string()).collect()
    }

    /// Check if a tool is registered
    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.iter().any(|t| t.name() == name)
    }

    /// Number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry has no tools
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

//! Knowledge-base lookup adapter
//!
//! A stand-in for a real vector search. It serves a small fixed corpus
//! with canned relevance scores so the rest of the pipeline can be built
//! and tested against a deterministic transcript. Swapping in an actual
//! vector store means replacing this one type; callers only see the
//! [`Tool`] trait.

use crate::tools::registry::{Tool, ToolError};
use async_trait::async_trait;

/// The canned corpus, highest score first.
const CORPUS: [(&str, f32); 3] = [
    (
        "CrewAI is a framework for orchestrating role-playing, autonomous AI agents.",
        0.92,
    ),
    (
        "To use CrewAI, you define Agents, Tasks, and a Crew.",
        0.88,
    ),
    (
        "Agents can be equipped with tools to interact with external systems.",
        0.85,
    ),
];

/// Deterministic knowledge-base stub.
pub struct KnowledgeBaseTool;

impl KnowledgeBaseTool {
    /// Create the stub adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for KnowledgeBaseTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for KnowledgeBaseTool {
    fn name(&self) -> &str {
        "knowledge_base"
    }

    fn description(&self) -> &str {
        "Searches a vector database for relevant information based on a query. \
         Useful for retrieving internal knowledge or past data."
    }

    async fn invoke(&self, _query: &str) -> std::result::Result<String, ToolError> {
        let mut lines = vec!["Found the following information in the vector database:".to_string()];
        for (document, score) in CORPUS {
            lines.push(format!("- {} (Score: {})", document, score));
        }
        Ok(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_same_output_for_any_query() {
        let tool = KnowledgeBaseTool::new();

        let a = tool.invoke("What is CrewAI?").await.unwrap();
        let b = tool.invoke("completely unrelated").await.unwrap();
        let c = tool.invoke("").await.unwrap();

        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[tokio::test]
    async fn test_exact_transcript_format() {
        let tool = KnowledgeBaseTool::new();
        let output = tool.invoke("anything").await.unwrap();

        assert_eq!(
            output,
            "Found the following information in the vector database:\n\
             - CrewAI is a framework for orchestrating role-playing, autonomous AI agents. (Score: 0.92)\n\
             - To use CrewAI, you define Agents, Tasks, and a Crew. (Score: 0.88)\n\
             - Agents can be equipped with tools to interact with external systems. (Score: 0.85)"
        );
    }

    #[test]
    fn test_corpus_order_is_descending_by_score() {
        let scores: Vec<f32> = CORPUS.iter().map(|(_, s)| *s).collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }
}

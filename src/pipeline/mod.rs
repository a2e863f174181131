//! Research → Writing Pipeline
//!
//! The fixed two-stage orchestration at the core of Quill. Every request
//! runs the same sequence:
//!
//! 1. **Research**: all registered tools run against the raw query; their
//!    outputs (and failures, rendered as text) become a transcript that is
//!    embedded in the research task. The researcher agent turns it into a
//!    findings summary.
//! 2. **Writing**: the writer agent, with no tool access, turns the
//!    findings into the final answer.
//!
//! Failure semantics are deliberately asymmetric. Tool failures are
//! recoverable: they appear in the transcript and the run continues on
//! whatever information remains. Model failures in either stage abort the
//! run with an error, so callers can tell a best-effort answer from a
//! failed pipeline.
//!
//! The pipeline holds only immutable state behind `&self`, so one instance
//! serves concurrent requests without locking.

use crate::agents::Agent;
use crate::tools::{ToolRegistry, ToolReport};
use crate::types::Result;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use uuid::Uuid;

/// Record of one executed pipeline stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageRecord {
    /// Role of the agent that ran the stage
    pub agent: String,
    /// The task prompt the agent received
    pub input: String,
    /// The agent's completion
    pub output: String,
    /// Unix timestamp when the stage finished
    pub timestamp: i64,
    /// Stage duration in milliseconds
    pub duration_ms: u64,
}

/// Result of a complete pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineOutput {
    /// Run id, shared with every log event of this run
    pub run_id: Uuid,
    /// The final answer from the writing stage
    pub answer: String,
    /// Per-stage execution trace, research stage first
    pub stages: Vec<StageRecord>,
    /// Total run duration in milliseconds
    pub duration_ms: u64,
}

/// The fixed researcher → writer orchestration.
pub struct Pipeline {
    researcher: Agent,
    writer: Agent,
    tools: ToolRegistry,
}

impl Pipeline {
    /// Assemble a pipeline from its two agents and the tool registry.
    pub fn new(researcher: Agent, writer: Agent, tools: ToolRegistry) -> Self {
        Self {
            researcher,
            writer,
            tools,
        }
    }

    /// Names of the tools available to the research stage.
    pub fn tool_names(&self) -> Vec<String> {
        self.tools.tool_names()
    }

    /// Run the full pipeline for one query.
    ///
    /// Returns the final answer plus the per-stage trace. Errors mean a
    /// model call failed; tool failures never surface here.
    pub async fn run(&self, query: &str) -> Result<PipelineOutput> {
        let run_id = Uuid::new_v4();
        let started = Instant::now();

        tracing::info!(
            %run_id,
            query_chars = query.len(),
            tools = self.tools.len(),
            "Pipeline run started"
        );

        // Research stage
        let stage_started = Instant::now();
        let reports = self.tools.gather(query).await;
        let research_prompt = research_task(query, &reports);

        let findings = match self.researcher.execute(&research_prompt).await {
            Ok(findings) => findings,
            Err(e) => {
                tracing::error!(%run_id, stage = "research", error = %e, "Pipeline stage failed");
                return Err(e);
            }
        };

        let research_record = StageRecord {
            agent: self.researcher.role().to_string(),
            input: research_prompt,
            output: findings.clone(),
            timestamp: Utc::now().timestamp(),
            duration_ms: stage_started.elapsed().as_millis() as u64,
        };
        tracing::info!(
            %run_id,
            stage = "research",
            agent = research_record.agent.as_str(),
            duration_ms = research_record.duration_ms,
            "Stage complete"
        );

        // Writing stage
        let stage_started = Instant::now();
        let writing_prompt = writing_task(query, &findings);

        let answer = match self.writer.execute(&writing_prompt).await {
            Ok(answer) => answer,
            Err(e) => {
                tracing::error!(%run_id, stage = "writing", error = %e, "Pipeline stage failed");
                return Err(e);
            }
        };

        let writing_record = StageRecord {
            agent: self.writer.role().to_string(),
            input: writing_prompt,
            output: answer.clone(),
            timestamp: Utc::now().timestamp(),
            duration_ms: stage_started.elapsed().as_millis() as u64,
        };
        tracing::info!(
            %run_id,
            stage = "writing",
            agent = writing_record.agent.as_str(),
            duration_ms = writing_record.duration_ms,
            "Stage complete"
        );

        let duration_ms = started.elapsed().as_millis() as u64;
        tracing::info!(%run_id, duration_ms, "Pipeline run complete");

        Ok(PipelineOutput {
            run_id,
            answer,
            stages: vec![research_record, writing_record],
            duration_ms,
        })
    }
}

/// Build the research task: the query plus the rendered tool transcript.
fn research_task(query: &str, reports: &[ToolReport]) -> String {
    let transcript = if reports.is_empty() {
        "No tools are available for this run.".to_string()
    } else {
        reports
            .iter()
            .map(|r| format!("[{}]\n{}", r.tool, r.render()))
            .collect::<Vec<_>>()
            .join("\n\n")
    };

    format!(
        r#"Research the following query: {}. Find the most critical information and provide a detailed summary.

Tool results gathered for this query:

{}

Produce a comprehensive summary of the research findings, including key facts, figures, and sources. Where a tool result contributed information, cite the tool it came from."#,
        query, transcript
    )
}

/// Build the writing task: the query plus the researcher's findings.
fn writing_task(query: &str, findings: &str) -> String {
    format!(
        r#"Based on the research summary, write a final answer to the query: {}. Your answer should be well-structured and easy to read.

Research summary:

{}

Produce a polished, final answer that directly addresses the user's query, synthesized from the research findings. Do not restate the findings verbatim; answer the question."#,
        query, findings
    )
}

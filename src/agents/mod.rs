//! Persona-Driven Agents
//!
//! An [`Agent`] is a configured persona (role, goal, backstory) bound to a
//! shared LLM client. The pipeline owns exactly two: a researcher and a
//! writer. Agents hold no per-run state; `execute` is a pure
//! prompt-in/completion-out call, so one instance safely serves concurrent
//! requests.

use crate::config::PersonaConfig;
use crate::llm::LLMClient;
use crate::types::Result;
use std::sync::Arc;

/// A role-playing agent driving one pipeline stage.
pub struct Agent {
    /// Short role title, also the agent's name in logs and stage records
    role: String,
    /// What the agent is trying to achieve
    goal: String,
    /// Character framing for the system prompt
    backstory: String,
    /// Shared LLM client
    llm: Arc<dyn LLMClient>,
}

impl Agent {
    /// Create an agent from a configured persona and a shared client.
    pub fn from_persona(persona: &PersonaConfig, llm: Arc<dyn LLMClient>) -> Self {
        Self {
            role: persona.role.clone(),
            goal: persona.goal.clone(),
            backstory: persona.backstory.clone(),
            llm,
        }
    }

    /// The agent's role title.
    pub fn role(&self) -> &str {
        &self.role
    }

    /// The system prompt establishing this agent's persona.
    pub fn system_prompt(&self) -> String {
        format!(
            r#"You are {}. {}

Your personal goal is: {}"#,
            self.role, self.backstory, self.goal
        )
    }

    /// Run one task through the model under this agent's persona.
    pub async fn execute(&self, task: &str) -> Result<String> {
        tracing::debug!(
            agent = %self.role,
            model = self.llm.model_name(),
            task_chars = task.len(),
            "Executing agent task"
        );

        self.llm.generate_with_system(&self.system_prompt(), task).await
    }
}

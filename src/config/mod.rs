//! TOML-based configuration for Quill.
//!
//! Declarative configuration for the server, the LLM provider, the two
//! pipeline agents, and the tool adapters via a TOML file (`quill.toml`).
//! Every table and field has a default matching the reference deployment
//! (local Ollama with `llama3.2:latest`, port 8000), so a missing file means
//! a fully usable configuration.
//!
//! Secrets never live in the file. Fields ending in `_env` name the
//! environment variable to read; values are resolved once at startup (the
//! binaries load `.env` via `dotenvy` first) and injected into the
//! components that need them.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure loaded from quill.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct QuillConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// The LLM provider backing both agents
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Personas for the researcher and writer agents
    #[serde(default)]
    pub agents: AgentsConfig,

    /// Tool adapter settings
    #[serde(default)]
    pub tools: ToolsConfig,
}

// ============= Server Configuration =============

/// Listener and logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
        }
    }
}

// ============= Provider Configuration =============

/// The LLM provider serving both pipeline stages.
///
/// Selected with `type = "ollama"` or `type = "openai"` in the `[provider]`
/// table. The matching cargo feature must be enabled at build time; picking
/// a provider whose feature is compiled out is a startup error, not a
/// runtime fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProviderConfig {
    /// Local inference via an Ollama server
    Ollama {
        /// Ollama base URL
        #[serde(default = "default_ollama_url")]
        base_url: String,
        /// Model tag, e.g. `llama3.2:latest`
        #[serde(default = "default_ollama_model")]
        model: String,
    },
    /// OpenAI API or any OpenAI-compatible endpoint
    OpenAI {
        /// Environment variable containing the API key
        #[serde(default = "default_openai_key_env")]
        api_key_env: String,
        /// API base URL
        #[serde(default = "default_openai_base")]
        api_base: String,
        /// Model name, e.g. `gpt-4o-mini`
        model: String,
    },
}

fn default_ollama_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_ollama_model() -> String {
    "llama3.2:latest".to_string()
}

fn default_openai_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

fn default_openai_base() -> String {
    "https://api.openai.com/v1".to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig::Ollama {
            base_url: default_ollama_url(),
            model: default_ollama_model(),
        }
    }
}

// ============= Agent Configuration =============

/// Personas for both pipeline agents.
///
/// Overriding an agent replaces its whole persona; the three fields are
/// required together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentsConfig {
    /// Persona driving the research stage
    #[serde(default = "default_researcher")]
    pub researcher: PersonaConfig,

    /// Persona driving the writing stage
    #[serde(default = "default_writer")]
    pub writer: PersonaConfig,
}

/// A role-playing persona assigned to one agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonaConfig {
    /// Short role title, used as the agent name in logs and stage records
    pub role: String,
    /// What the agent is trying to achieve
    pub goal: String,
    /// Character framing included in the system prompt
    pub backstory: String,
}

fn default_researcher() -> PersonaConfig {
    PersonaConfig {
        role: "Senior Researcher".to_string(),
        goal: "Research the user's query using available tools to find the most \
               relevant and up-to-date information."
            .to_string(),
        backstory: "You are a skilled researcher, adept at sifting through data to \
                    find factual and actionable insights."
            .to_string(),
    }
}

fn default_writer() -> PersonaConfig {
    PersonaConfig {
        role: "Senior Writer".to_string(),
        goal: "Use the insights from the researcher to compose a clear, concise, \
               and comprehensive answer to the user's query."
            .to_string(),
        backstory: "You are a skilled writer, known for your ability to explain \
                    complex topics in an easily understandable way."
            .to_string(),
    }
}

impl Default for AgentsConfig {
    fn default() -> Self {
        Self {
            researcher: default_researcher(),
            writer: default_writer(),
        }
    }
}

// ============= Tool Configuration =============

/// Settings for the tool adapters available to the research stage.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ToolsConfig {
    /// Web scrape adapter (FireCrawl-style API)
    #[serde(default)]
    pub web_scrape: WebScrapeConfig,

    /// Knowledge-base lookup adapter
    #[serde(default)]
    pub knowledge_base: KnowledgeBaseConfig,
}

/// Web scrape adapter settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebScrapeConfig {
    /// Whether the adapter is registered at startup
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Environment variable containing the scrape API key
    #[serde(default = "default_scrape_key_env")]
    pub api_key_env: String,

    /// Scrape endpoint URL
    #[serde(default = "default_scrape_endpoint")]
    pub endpoint: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_tool_timeout")]
    pub timeout_secs: u64,
}

fn default_true() -> bool {
    true
}

fn default_scrape_key_env() -> String {
    "FIRECRAWL_API_KEY".to_string()
}

fn default_scrape_endpoint() -> String {
    "https://api.firecrawl.dev/v0/scrape".to_string()
}

fn default_tool_timeout() -> u64 {
    30
}

impl Default for WebScrapeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_key_env: default_scrape_key_env(),
            endpoint: default_scrape_endpoint(),
            timeout_secs: default_tool_timeout(),
        }
    }
}

/// Knowledge-base adapter settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeBaseConfig {
    /// Whether the adapter is registered at startup
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for KnowledgeBaseConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

// ============= Configuration Loading & Validation =============

/// Errors that can occur during configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file {0}: {1}")]
    ReadError(PathBuf, std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize configuration: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Environment variable '{0}' referenced in config is not set")]
    MissingEnvVar(String),
}

impl From<ConfigError> for crate::types::AppError {
    fn from(err: ConfigError) -> Self {
        crate::types::AppError::Config(err.to_string())
    }
}

impl QuillConfig {
    /// Load configuration from a TOML file.
    ///
    /// A missing file is not an error: the defaults describe a complete
    /// local deployment. Unreadable or malformed files are fatal.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_path_buf(), e))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: QuillConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Render the resolved configuration back to TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate that every environment variable the configuration requires
    /// at startup is actually set.
    ///
    /// The scrape credential is deliberately not checked here: its absence
    /// is a recoverable per-call tool error, not a startup failure.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let ProviderConfig::OpenAI { api_key_env, .. } = &self.provider {
            if std::env::var(api_key_env).is_err() {
                return Err(ConfigError::MissingEnvVar(api_key_env.clone()));
            }
        }
        Ok(())
    }

    /// Resolve the scrape API key named by the config, if set.
    pub fn scrape_credential(&self) -> Option<String> {
        std::env::var(&self.tools.web_scrape.api_key_env).ok()
    }

    /// The address the server should bind to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = QuillConfig::from_toml_str("").unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.log_level, "info");
        assert!(config.tools.web_scrape.enabled);
        assert!(config.tools.knowledge_base.enabled);
        assert_eq!(config.tools.web_scrape.api_key_env, "FIRECRAWL_API_KEY");
        assert_eq!(config.tools.web_scrape.timeout_secs, 30);

        match config.provider {
            ProviderConfig::Ollama { base_url, model } => {
                assert_eq!(base_url, "http://localhost:11434");
                assert_eq!(model, "llama3.2:latest");
            }
            other => panic!("expected ollama default, got {:?}", other),
        }
    }

    #[test]
    fn test_default_personas_match_reference_agents() {
        let config = QuillConfig::default();

        assert_eq!(config.agents.researcher.role, "Senior Researcher");
        assert!(config.agents.researcher.goal.contains("available tools"));
        assert_eq!(config.agents.writer.role, "Senior Writer");
        assert!(config.agents.writer.goal.contains("comprehensive answer"));
    }

    #[test]
    fn test_parse_full_config() {
        let content = r#"
[server]
host = "0.0.0.0"
port = 9000
log_level = "debug"

[provider]
type = "ollama"
base_url = "http://10.0.0.5:11434"
model = "mistral"

[agents.researcher]
role = "Analyst"
goal = "Dig deep."
backstory = "Knows everything."

[agents.writer]
role = "Editor"
goal = "Write well."
backstory = "Writes everything."

[tools.web_scrape]
enabled = false
api_key_env = "SCRAPE_KEY"
endpoint = "https://scrape.example.com/v1"
timeout_secs = 5

[tools.knowledge_base]
enabled = false
"#;

        let config = QuillConfig::from_toml_str(content).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.agents.researcher.role, "Analyst");
        assert_eq!(config.agents.writer.role, "Editor");
        assert!(!config.tools.web_scrape.enabled);
        assert_eq!(config.tools.web_scrape.timeout_secs, 5);
        assert!(!config.tools.knowledge_base.enabled);

        match config.provider {
            ProviderConfig::Ollama { base_url, model } => {
                assert_eq!(base_url, "http://10.0.0.5:11434");
                assert_eq!(model, "mistral");
            }
            other => panic!("expected ollama, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_openai_provider() {
        let content = r#"
[provider]
type = "openai"
model = "gpt-4o-mini"
"#;

        let config = QuillConfig::from_toml_str(content).unwrap();

        match config.provider {
            ProviderConfig::OpenAI {
                api_key_env,
                api_base,
                model,
            } => {
                assert_eq!(api_key_env, "OPENAI_API_KEY");
                assert_eq!(api_base, "https://api.openai.com/v1");
                assert_eq!(model, "gpt-4o-mini");
            }
            other => panic!("expected openai, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_provider_type_is_rejected() {
        let content = r#"
[provider]
type = "carrier-pigeon"
model = "homing"
"#;

        assert!(QuillConfig::from_toml_str(content).is_err());
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let config = QuillConfig::load("definitely/not/a/real/quill.toml").unwrap();
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quill.toml");
        fs::write(&path, "[server]\nport = 4242\n").unwrap();

        let config = QuillConfig::load(&path).unwrap();
        assert_eq!(config.server.port, 4242);
    }

    #[test]
    fn test_roundtrip_through_toml() {
        let config = QuillConfig::default();
        let rendered = config.to_toml_string().unwrap();
        let reparsed = QuillConfig::from_toml_str(&rendered).unwrap();

        assert_eq!(reparsed.server.port, config.server.port);
        assert_eq!(reparsed.agents.researcher.role, "Senior Researcher");
    }

    #[test]
    fn test_validate_openai_requires_key_env() {
        let content = r#"
[provider]
type = "openai"
api_key_env = "QUILL_TEST_KEY_THAT_IS_NOT_SET"
model = "gpt-4o-mini"
"#;

        let config = QuillConfig::from_toml_str(content).unwrap();
        let result = config.validate();

        assert!(matches!(result, Err(ConfigError::MissingEnvVar(_))));
    }

    #[test]
    fn test_validate_default_config_needs_no_env() {
        let config = QuillConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bind_addr() {
        let config = QuillConfig::default();
        assert_eq!(config.bind_addr(), "127.0.0.1:8000");
    }
}

//! Init command implementation
//!
//! Scaffolds a new Quill project: quill.toml, .env.example, .gitignore.

use super::output::Output;
use std::fs;
use std::path::Path;

/// Result of the init operation
pub enum InitResult {
    /// Initialization completed successfully
    Success,
    /// Project already exists (quill.toml found)
    AlreadyExists,
    /// An error occurred during initialization
    Error(String),
}

/// Configuration for the init command
pub struct InitConfig {
    /// Directory to initialize
    pub path: std::path::PathBuf,
    /// Overwrite existing files
    pub force: bool,
    /// LLM provider to configure (ollama or openai)
    pub provider: String,
    /// Host address for the server
    pub host: String,
    /// Port for the server
    pub port: u16,
}

/// Run the init command
pub fn run(config: InitConfig, output: &Output) -> InitResult {
    output.banner();
    output.header("Initializing Quill Project");

    let base_path = &config.path;

    // Check if quill.toml already exists
    let config_path = base_path.join("quill.toml");
    if config_path.exists() && !config.force {
        output.warning("quill.toml already exists!");
        output.hint("Use --force to overwrite existing files");
        return InitResult::AlreadyExists;
    }

    if !base_path.exists() {
        if let Err(e) = fs::create_dir_all(base_path) {
            output.error(&format!("Failed to create {}: {}", base_path.display(), e));
            return InitResult::Error(e.to_string());
        }
        output.created_dir(&base_path.display().to_string());
    }

    output.subheader("Creating configuration files");

    let toml_content = generate_quill_toml(&config);
    if let Err(e) = write_file(&config_path, &toml_content, config.force) {
        output.error(&format!("Failed to create quill.toml: {}", e));
        return InitResult::Error(e.to_string());
    }
    output.created("config", "quill.toml");

    let env_example_path = base_path.join(".env.example");
    let env_content = generate_env_example();
    if let Err(e) = write_file(&env_example_path, &env_content, config.force) {
        output.error(&format!("Failed to create .env.example: {}", e));
        return InitResult::Error(e.to_string());
    }
    output.created("env", ".env.example");

    // Create .gitignore if it doesn't exist
    let gitignore_path = base_path.join(".gitignore");
    if !gitignore_path.exists() {
        let gitignore_content = generate_gitignore();
        if let Err(e) = write_file(&gitignore_path, &gitignore_content, false) {
            output.warning(&format!("Failed to create .gitignore: {}", e));
        } else {
            output.created("file", ".gitignore");
        }
    }

    output.complete("Quill project initialized successfully!");

    output.header("Next Steps");
    output.newline();
    output.info("1. Set up environment variables:");
    output.command("cp .env.example .env");
    output.command("# Edit .env and set FIRECRAWL_API_KEY to enable web scraping");
    output.newline();

    if config.provider == "ollama" {
        output.info("2. Start Ollama (if not running):");
        output.command("ollama serve");
        output.command("ollama pull llama3.2:latest  # or your preferred model");
        output.newline();
    }

    output.info("3. Start the server:");
    output.command("quill-server");
    output.newline();

    output.info("4. Send a query:");
    output.command("quill --query \"What is CrewAI?\"");

    output.hint(&format!(
        "Server will be available at http://{}:{}",
        config.host, config.port
    ));
    output.hint("OpenAPI document available at /openapi.json");

    InitResult::Success
}

fn write_file(path: &Path, content: &str, force: bool) -> std::io::Result<()> {
    if path.exists() && !force {
        return Ok(()); // Skip existing files unless force is true
    }
    fs::write(path, content)
}

fn generate_quill_toml(config: &InitConfig) -> String {
    let provider_section = if config.provider == "openai" {
        r#"# OpenAI API (set OPENAI_API_KEY in .env)
[provider]
type = "openai"
api_key_env = "OPENAI_API_KEY"
api_base = "https://api.openai.com/v1"
model = "gpt-4o-mini"
"#
    } else {
        // Default to ollama
        r#"# Ollama - Local inference (no API key required)
[provider]
type = "ollama"
base_url = "http://localhost:11434"
model = "llama3.2:latest"
"#
    };

    format!(
        r#"# Quill Configuration
# ===================
# Generated by: quill-server init
#
# Every field is optional: missing values fall back to the defaults shown
# here. Secrets never live in this file; fields ending in _env name the
# environment variable to read (.env is honored).

# =============================================================================
# Server Configuration
# =============================================================================
[server]
host = "{host}"
port = {port}
log_level = "info"

# =============================================================================
# LLM Provider
# =============================================================================
{provider_section}
# =============================================================================
# Agent Personas
# =============================================================================
# Overriding an agent replaces its whole persona; role, goal, and backstory
# are required together.
[agents.researcher]
role = "Senior Researcher"
goal = "Research the user's query using available tools to find the most relevant and up-to-date information."
backstory = "You are a skilled researcher, adept at sifting through data to find factual and actionable insights."

[agents.writer]
role = "Senior Writer"
goal = "Use the insights from the researcher to compose a clear, concise, and comprehensive answer to the user's query."
backstory = "You are a skilled writer, known for your ability to explain complex topics in an easily understandable way."

# =============================================================================
# Tool Adapters
# =============================================================================
[tools.web_scrape]
enabled = true
api_key_env = "FIRECRAWL_API_KEY"
endpoint = "https://api.firecrawl.dev/v0/scrape"
timeout_secs = 30

[tools.knowledge_base]
enabled = true
"#,
        host = config.host,
        port = config.port,
        provider_section = provider_section,
    )
}

fn generate_env_example() -> String {
    r#"# Quill Environment Variables
# ===========================
# Copy this file to .env and fill in the values.

# Optional: FireCrawl API key for the web_scrape tool.
# Without it the tool reports a credential error in the research
# transcript and the pipeline continues on the knowledge base alone.
FIRECRAWL_API_KEY=

# Optional: OpenAI API key (if using the openai provider)
# OPENAI_API_KEY=sk-...

# Optional: Logging level (trace, debug, info, warn, error)
RUST_LOG=info,quill=debug
"#
    .to_string()
}

fn generate_gitignore() -> String {
    r#"# Environment
.env
.env.local
.env.*.local

# Rust
/target/
Cargo.lock

# IDE
.idea/
.vscode/
*.swp
*.swo
*~

# OS
.DS_Store
Thumbs.db
"#
    .to_string()
}

//! CLI module for Quill
//!
//! Provides command-line interface parsing and handling for the
//! quill-server binary. Uses clap for argument parsing and owo-colors for
//! colored terminal output.

pub mod init;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Quill - a minimal agentic research server
#[derive(Parser, Debug)]
#[command(
    name = "quill-server",
    version,
    about = "Quill - a minimal agentic research server",
    long_about = "A research pipeline served over HTTP: every query runs through a fixed\n\
                  researcher + writer agent pair, with pluggable tool adapters feeding\n\
                  the research stage.\n\n\
                  Run without arguments to start the server, or use 'init' to scaffold a project.",
    after_help = "EXAMPLES:\n    \
                  quill-server init               # Scaffold quill.toml and .env.example\n    \
                  quill-server                    # Start the server\n    \
                  quill-server --config my.toml   # Use a custom config file\n    \
                  quill-server config --validate  # Check the configuration"
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "quill.toml", global = true)]
    pub config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new Quill project with configuration files
    ///
    /// Creates quill.toml, .env.example, and .gitignore in the target
    /// directory.
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite existing files without prompting
        #[arg(short, long)]
        force: bool,

        /// LLM provider to configure (ollama or openai)
        #[arg(long, default_value = "ollama")]
        provider: String,

        /// Host address for the server
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port for the server
        #[arg(long, default_value = "8000")]
        port: u16,
    },

    /// Show configuration information
    Config {
        /// Validate the configuration file
        #[arg(long)]
        validate: bool,
    },
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

//! quill binary: one-shot CLI client for a running Quill server.

use clap::Parser;
use quill::cli::output::Output;
use quill::client::QuillClient;

/// Send a query to a running Quill server
#[derive(Parser, Debug)]
#[command(
    name = "quill",
    version,
    about = "Send a query through a running Quill server's research pipeline",
    after_help = "EXAMPLES:\n    \
                  quill --query \"What is CrewAI?\"\n    \
                  quill --query \"What is CrewAI?\" --server-url http://10.0.0.5:8000"
)]
struct Cli {
    /// The query to run through the research pipeline
    #[arg(long)]
    query: String,

    /// Base URL of the Quill server
    #[arg(
        long,
        default_value = "http://127.0.0.1:8000",
        env = "QUILL_SERVER_URL"
    )]
    server_url: String,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let output = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    let client = QuillClient::new(&cli.server_url);

    match client.predict(&cli.query).await {
        Ok(value) => {
            // Pretty-print the output value; a bare string prints JSON-quoted.
            println!("{:#}", value);
        }
        Err(e) => {
            output.error(&e.to_string());
            std::process::exit(1);
        }
    }
}

//! quill-server binary: serve the pipeline, or scaffold/inspect a project.

use anyhow::Context;
use quill::cli::{Cli, Commands, init, output::Output};
use quill::{AppState, QuillConfig, api};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    let cli = Cli::parse_args();
    let output = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    match cli.command {
        Some(Commands::Init {
            path,
            force,
            provider,
            host,
            port,
        }) => {
            let result = init::run(
                init::InitConfig {
                    path,
                    force,
                    provider,
                    host,
                    port,
                },
                &output,
            );
            match result {
                init::InitResult::Success => Ok(()),
                init::InitResult::AlreadyExists => std::process::exit(1),
                init::InitResult::Error(e) => anyhow::bail!("init failed: {}", e),
            }
        }

        Some(Commands::Config { validate }) => run_config(&cli, validate, &output),

        None => serve(&cli, &output).await,
    }
}

/// Print or validate the resolved configuration.
fn run_config(cli: &Cli, validate: bool, output: &Output) -> anyhow::Result<()> {
    if !cli.config.exists() {
        output.info(&format!(
            "{} not found, showing defaults",
            cli.config.display()
        ));
    }

    let config = QuillConfig::load(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;

    if validate {
        match config.validate() {
            Ok(()) => {
                output.success("Configuration is valid");
                Ok(())
            }
            Err(e) => {
                output.error(&e.to_string());
                std::process::exit(1);
            }
        }
    } else {
        output.header("Resolved configuration");
        output.kv("file", &cli.config.display().to_string());
        output.newline();
        println!("{}", config.to_toml_string()?);
        Ok(())
    }
}

/// Load the configuration and serve the pipeline over HTTP.
async fn serve(cli: &Cli, output: &Output) -> anyhow::Result<()> {
    let config_found = cli.config.exists();
    let config = QuillConfig::load(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;

    init_tracing(&config, cli.verbose);

    if !config_found {
        tracing::info!(config = %cli.config.display(), "Config file not found, using defaults");
    }

    let addr = config.bind_addr();

    output.banner();
    output.kv("config", &cli.config.display().to_string());
    output.kv("address", &format!("http://{}", addr));
    output.newline();

    let state = AppState::initialize(config).context("failed to initialize application state")?;

    let app = api::routes::create_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!(%addr, "Quill server listening");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the configured log level applies
/// (forced to debug by `--verbose`).
fn init_tracing(config: &QuillConfig, verbose: bool) {
    let level = if verbose {
        "debug".to_string()
    } else {
        config.server.log_level.clone()
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

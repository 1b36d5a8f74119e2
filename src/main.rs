//! Deepthought CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use deepthought::agent;
use deepthought::client::LettaClient;
use deepthought::config::DeepthoughtConfig;
use deepthought::registrar;
use deepthought::search;

/// Drive a deep-research agent on a Letta-compatible platform.
#[derive(Parser)]
#[command(name = "deepthought", version, about)]
struct Cli {
    /// Research task submitted to the agent (defaults to the postgres report).
    #[arg(long)]
    task: Option<String>,

    /// Platform base URL (overrides LETTA_BASE_URL).
    #[arg(long)]
    base_url: Option<String>,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("deepthought={log_level}")),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> deepthought::error::Result<()> {
    let mut config = DeepthoughtConfig::from_env();
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }

    println!("Connecting to platform at {}", config.base_url);
    let client = LettaClient::new(&config)?;

    let outcomes = registrar::register_research_tools(&client).await;
    for (tool, outcome) in &outcomes {
        if !outcome.is_success() {
            eprintln!("Warning: {tool} registration {outcome}");
        }
    }

    let search_tool_ids = search::setup_exa_search(&client, &config).await;

    let agent = agent::bootstrap(&client, search_tool_ids).await?;

    let task = cli.task.as_deref().unwrap_or(agent::DEFAULT_TASK);
    agent::run_research(&client, &agent, task).await
}

mod app;
mod bootstrap;
mod cli;
mod interactive;
mod llm;
mod output;
mod paths;
mod prompt;
mod render;
mod request_engine;
mod sanitize;
mod transcript;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    app::run(cli::Cli::parse()).await
}

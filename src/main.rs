use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use search_console_sdk::config;
use search_console_sdk::mcp::{self, ToolServer};
use search_console_sdk::SearchConsole;
use tracing_subscriber::EnvFilter;

/// MCP tool server exposing Google Search Console analytics over stdio.
#[derive(Debug, Parser)]
#[command(name = "search-console-mcp", version, about)]
struct Cli {
    /// Service-account key file.
    #[arg(long, env = config::CREDENTIALS_ENV)]
    credentials: Option<PathBuf>,

    /// HTTP timeout for API and token requests, in seconds.
    #[arg(long, default_value_t = 120)]
    timeout_secs: u64,

    /// Search Console API root.
    #[arg(long, env = "SEARCH_CONSOLE_API_BASE", default_value = config::API_BASE)]
    api_base: String,

    /// Log filter directives (stderr only; stdout carries the protocol).
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    log_filter: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    let mut builder = SearchConsole::builder()
        .timeout(Duration::from_secs(cli.timeout_secs))
        .api_base(&cli.api_base);
    if let Some(path) = &cli.credentials {
        builder = builder.credentials_path(path);
    }

    match mcp::serve_stdio(ToolServer::new(builder)).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("server failed: {e}");
            ExitCode::FAILURE
        }
    }
}

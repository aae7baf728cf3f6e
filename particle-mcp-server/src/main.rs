use clap::Parser;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

use particle_mcp_server::config::ParticleConfig;
use particle_mcp_server::mcp::run_stdio_server;
use particle_mcp_server::particle::ParticleClient;

/// MCP server exposing the Particle Cloud REST API as assistant tools
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Override the Particle API base URL (default: https://api.particle.io)
    #[arg(long)]
    api_base: Option<String>,

    /// Override the per-request HTTP timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up PARTICLE_ACCESS_TOKEN and friends from a .env file if present
    dotenvy::dotenv().ok();

    // stdout carries the MCP stream, so all logging goes to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // A missing or empty token is fatal before any tool is registered
    let mut config = ParticleConfig::from_env()?;
    if let Some(api_base) = args.api_base {
        config = ParticleConfig::new(config.access_token, api_base, config.request_timeout)?;
    }
    if let Some(timeout_secs) = args.timeout_secs {
        config.request_timeout = Duration::from_secs(timeout_secs);
    }

    info!(
        "Particle MCP server starting, API base {} (timeout {}s)",
        config.api_base,
        config.request_timeout.as_secs()
    );

    let client = ParticleClient::new(&config)?;
    run_stdio_server(client).await
}

//! ABZ Agent API gateway - HTTP front door for the website chatbot

use abz_agent_api::config::Settings;
use abz_agent_api::gateway::{serve, AppState};
use clap::Parser;
use std::net::SocketAddr;
use tracing::info;

// ---- CLI ----

#[derive(Parser)]
#[command(name = "abz-gateway", about = "HTTP gateway for the ABZ website chatbot")]
struct Args {
    /// Bind address
    #[arg(long, env = "GATEWAY_BIND", default_value = "0.0.0.0")]
    bind: String,

    /// Port
    #[arg(long, short, env = "GATEWAY_PORT", default_value = "8000")]
    port: u16,
}

// ---- Main ----

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();

    // Load settings (.env honored); credential checks are deferred to
    // the first chat request.
    let settings = Settings::from_env();
    info!(
        env = %settings.env,
        credential = settings.has_credential(),
        "settings loaded"
    );

    let addr: SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    serve(AppState::new(settings), addr).await?;

    Ok(())
}

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use iscs::config;
use iscs::HttpServer;

/// Inter-Service Communication Server.
#[derive(Parser)]
#[command(name = "iscs")]
#[command(about = "Path-based request router for the User and Product services", long_about = None)]
struct Cli {
    /// Path to the JSON config file.
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "iscs=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("iscs v0.1.0 starting");

    let config = config::load_config(&cli.config)?;

    tracing::info!(
        user = %config.user.base_url(),
        product = %config.product.base_url(),
        bind_address = %config.listener.bind_address(),
        "Configuration loaded"
    );

    let listener = TcpListener::bind(config.listener.bind_address()).await?;

    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

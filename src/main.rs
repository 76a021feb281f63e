mod api;
mod config;
mod github;
mod transform;
mod validate;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use std::sync::Arc;
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::{prelude::*, EnvFilter};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Override the port from PORT/SERVER_PORT
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install().wrap_err("Failed to install color-eyre error handler")?;

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .wrap_err("Failed to create EnvFilter")?;
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(tracing_subscriber::fmt::layer())
        .with(ErrorLayer::default())
        .init();

    let cli = Cli::parse();
    let mut config = config::Config::new()?;
    if let Some(port) = cli.port {
        config.port = port;
    }

    let github_client = github::GitHubClient::new(config.clone());
    let app_state = Arc::new(api::types::AppState { github_client });
    let app = api::create_router(app_state);

    info!("Starting API server on {}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind((config.host, config.port))
        .await
        .wrap_err_with(|| format!("Failed to bind server to {}:{}", config.host, config.port))?;
    axum::serve(listener, app)
        .await
        .wrap_err("Failed to start API server")?;

    Ok(())
}

//! Standalone API server (the `/api` proxy without the Dioxus frontend)
//! Use this for API-only testing or backend development.
//!
//! Run with: cargo run --bin server --features server -- --port 3003

use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use tower_http::cors::CorsLayer;

use medilink_web::config::AppConfig;
use medilink_web::handlers::{api_router, ApiState};
use medilink_web::infrastructure::backend::install_backend;

#[derive(Debug, Parser)]
#[command(name = "medilink-api", about = "Medilink same-origin API proxy")]
struct Args {
    /// Listening port (defaults to PORT or 3001)
    #[arg(short, long)]
    port: Option<u16>,

    /// Remote REST API base URL
    #[arg(long, env = "BACKEND_API_URL")]
    backend_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    let mut config = AppConfig::from_env().context("Invalid configuration")?;
    if let Some(url) = args.backend_url.as_deref() {
        config = config.with_backend_url(url)?;
    }
    let port = args.port.unwrap_or(config.port);

    tracing::info!(backend = %config.backend_api_url, "Starting Medilink API server (standalone)...");

    let state = ApiState::from_config(&config).context("Failed to build backend client")?;
    install_backend(state.backend.clone());

    let app = api_router(state).layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    tracing::info!("Server running on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}

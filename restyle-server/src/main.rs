//! Restyle Server - Headless Daemon
//!
//! A pure Rust HTTP server that:
//! - Runs try-on orchestration on POST /v1/tryon
//! - Answers CORS preflights for browser callers
//! - Exposes /health for liveness probes
//!
//! Access via: http://localhost:8047

use anyhow::Result;
use axum::{extract::DefaultBodyLimit, routing::get, routing::post, Router};
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod api;

use api::AppState;
use restyle_core::UpstreamClient;

const DEFAULT_PORT: u16 = 8047;

/// Base64-encoded photos run to several megabytes each; allow two plus
/// headroom.
const MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

#[derive(Parser, Debug)]
#[command(name = "restyle-server", about = "Restyle try-on daemon", version)]
struct Cli {
    /// Address to bind.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on.
    #[arg(long, env = "RESTYLE_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    info!("🚀 Restyle server starting on port {}...", cli.port);

    let upstream = Arc::new(UpstreamClient::from_env(reqwest::Client::new()));
    info!("🔀 Upstream endpoint: {}", upstream.endpoint());

    let state = AppState { upstream };
    let app = build_router(state);

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("🌐 Server listening on http://{}", addr);
    info!("👗 Try-on endpoint at http://{}/v1/tryon", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/v1/tryon", post(api::handle_try_on))
        .route("/health", get(api::health_check))
        .route("/healthz", get(api::health_check))
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
}

mod config;
mod errors;
mod extraction;
mod models;
mod routes;
mod scanner;
mod state;
mod taxonomy;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::scanner::AtsScanner;
use crate::state::AppState;
use crate::taxonomy::software_taxonomy;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ATS API v{}", env!("CARGO_PKG_VERSION"));

    // Load the skill taxonomy once; every request shares it read-only
    let taxonomy = Arc::new(software_taxonomy()?);
    info!(
        "Skill taxonomy loaded: {} skills in {} categories",
        taxonomy.skill_count(),
        taxonomy.categories().len()
    );

    let scanner = AtsScanner::new(taxonomy, config.match_policy)?;
    info!("ATS scanner initialized (match policy: {})", scanner.policy());

    let state = AppState {
        config: config.clone(),
        scanner: Arc::new(scanner),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

mod analysis;
mod ats;
mod config;
mod errors;
mod models;
mod parsing;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::parsing::FileDecoder;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first; malformed values abort startup
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ATS scanner v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Upload limit: {} bytes, {} skills / {} titles / {} certifications loaded",
        config.max_upload_bytes,
        analysis::vocabulary::SKILLS.len(),
        analysis::vocabulary::JOB_TITLES.len(),
        analysis::vocabulary::CERTIFICATIONS.len(),
    );

    let state = AppState {
        config: config.clone(),
        decoder: Arc::new(FileDecoder),
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

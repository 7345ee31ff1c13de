mod analysis;
mod config;
mod errors;
mod intake;
mod locale;
mod models;
mod render;
mod routes;
mod session;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::HttpAnalysisTransport;
use crate::config::Config;
use crate::routes::build_router;
use crate::session::ResumeSession;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume analyzer v{}", env!("CARGO_PKG_VERSION"));

    let transport =
        HttpAnalysisTransport::new(config.analysis_api_url.clone(), config.analysis_timeout)?;
    info!(
        "Analysis backend: {} (timeout {}s)",
        transport.endpoint(),
        config.analysis_timeout.as_secs()
    );

    let session = ResumeSession::new(Arc::new(transport), config.locale);
    info!("UI locale: {:?}", config.locale);

    let app = build_router(AppState::new(session)).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

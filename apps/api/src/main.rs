mod activity;
mod applications;
mod config;
mod errors;
mod generation;
mod jobs;
mod preferences;
mod routes;
mod state;
mod storage;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::jobs::{AdzunaProvider, JobProvider, JobSearchService};
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::{FileStore, KeyValueStore, MemoryStore};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Careerdesk API v{}", env!("CARGO_PKG_VERSION"));

    // Local store: files under DATA_DIR, or memory only
    let local: Arc<dyn KeyValueStore> = match &config.data_dir {
        Some(dir) => Arc::new(FileStore::open(dir).await?),
        None => {
            info!("DATA_DIR not set, local store is in-memory");
            Arc::new(MemoryStore::new())
        }
    };

    // Session store lives exactly as long as this process
    let session = MemoryStore::new();

    let provider: Option<Arc<dyn JobProvider>> = match &config.adzuna {
        Some(creds) => {
            let provider = AdzunaProvider::new(
                config.adzuna_base_url.clone(),
                creds.app_id.clone(),
                creds.app_key.clone(),
            )?;
            info!("Job search provider: Adzuna ({})", config.adzuna_base_url);
            Some(Arc::new(provider))
        }
        None => {
            warn!("ADZUNA_APP_ID/ADZUNA_APP_KEY not set, job search serves sample data");
            None
        }
    };

    let state = AppState::build(
        local,
        &session,
        config.sampler_interval,
        JobSearchService::new(provider),
    )
    .await;
    let views = state.views.clone();

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Record final time samples for views still open
    views.close_all().await;
    info!("Shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

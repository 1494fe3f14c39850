mod config;
mod errors;
mod extract;
mod generation;
mod impact;
mod models;
mod profile;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, StoreBackend};
use crate::generation::scoring::{FixedMatchScorer, MatchScorer, RandomMatchScorer};
use crate::profile::store::{FileProfileStore, MemoryProfileStore, ProfileStore};
use crate::routes::build_router;
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

    info!("Starting CVJoyRide API v{}", env!("CARGO_PKG_VERSION"));

    let profile_store = build_profile_store(&config)?;
    let scorer = build_scorer(&config);
    info!(
        "Match scorer: {} | synthesis delay: {}ms",
        scorer.backend(),
        config.synthesis_delay.as_millis()
    );

    let state = AppState::new(config.clone(), profile_store, scorer);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // browser frontend is served from another origin

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_profile_store(config: &Config) -> Result<Arc<dyn ProfileStore>> {
    match config.store_backend {
        StoreBackend::File => {
            let store = FileProfileStore::open(&config.store_dir).with_context(|| {
                format!(
                    "failed to open profile store in {}",
                    config.store_dir.display()
                )
            })?;
            info!("Profile persisted to {}", store.path().display());
            Ok(Arc::new(store))
        }
        StoreBackend::Memory => {
            warn!("Using in-memory profile store; profiles are lost on restart");
            Ok(Arc::new(MemoryProfileStore::new()))
        }
    }
}

fn build_scorer(config: &Config) -> Arc<dyn MatchScorer> {
    match config.fixed_match_score {
        Some(value) => Arc::new(FixedMatchScorer::new(value)),
        None => Arc::new(RandomMatchScorer),
    }
}

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::generation::scoring::MatchScorer;
use crate::generation::synthesizer::Synthesizer;
use crate::models::document::GeneratedDocument;
use crate::profile::store::ProfileStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// The single-profile store. File-backed in production, in-memory in tests.
    pub profile_store: Arc<dyn ProfileStore>,
    pub synthesizer: Arc<Synthesizer>,
    /// Most recent successful generation; served by preview and download.
    pub latest_document: Arc<RwLock<Option<GeneratedDocument>>>,
    /// Set while a generation is running.
    pub generating: Arc<AtomicBool>,
}

impl AppState {
    pub fn new(
        config: Config,
        profile_store: Arc<dyn ProfileStore>,
        scorer: Arc<dyn MatchScorer>,
    ) -> Self {
        AppState {
            config,
            profile_store,
            synthesizer: Arc::new(Synthesizer::new(scorer)),
            latest_document: Arc::new(RwLock::new(None)),
            generating: Arc::new(AtomicBool::new(false)),
        }
    }
}

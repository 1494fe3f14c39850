pub mod health;
pub mod overview;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::generation::handlers as generation;
use crate::impact::handlers as impact;
use crate::profile::handlers as profile;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/overview", get(overview::overview_handler))
        // Profile
        .route(
            "/api/v1/profile",
            put(profile::handle_save_profile)
                .get(profile::handle_get_profile)
                .delete(profile::handle_clear_profile),
        )
        // Generation
        .route("/api/v1/cv/generate", post(generation::handle_generate))
        .route("/api/v1/cv/latest", get(generation::handle_latest))
        .route("/api/v1/cv/download", get(generation::handle_download))
        .route("/api/v1/cv/status", get(generation::handle_status))
        // Impact dashboard
        .route("/api/v1/impact", get(impact::handle_impact))
        .with_state(state)
}

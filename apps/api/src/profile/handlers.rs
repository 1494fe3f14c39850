use std::sync::Arc;

use anyhow::Context;
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::extract::AppJson;
use crate::models::notice::Notice;
use crate::models::profile::{Profile, StoredProfile};
use crate::profile::store::{ProfileStore, StoreError};
use crate::profile::validation::validate_profile;
use crate::state::AppState;

#[derive(Serialize)]
pub struct SaveProfileResponse {
    pub stored: StoredProfile,
    pub notice: Notice,
}

/// Runs a store call on the blocking pool.
async fn with_store<T, F>(store: &Arc<dyn ProfileStore>, op: F) -> Result<T, AppError>
where
    T: Send + 'static,
    F: FnOnce(&dyn ProfileStore) -> Result<T, StoreError> + Send + 'static,
{
    let store = Arc::clone(store);
    let result = tokio::task::spawn_blocking(move || op(store.as_ref()))
        .await
        .context("profile store task did not complete")?;
    Ok(result?)
}

/// Loads the stored profile, `None` when absent or unreadable.
pub async fn load_stored_profile(
    store: &Arc<dyn ProfileStore>,
) -> Result<Option<StoredProfile>, AppError> {
    with_store(store, |s| s.load()).await
}

/// PUT /api/v1/profile
///
/// Text is stored as submitted, apart from the email which is trimmed.
pub async fn handle_save_profile(
    State(state): State<AppState>,
    AppJson(mut profile): AppJson<Profile>,
) -> Result<Json<SaveProfileResponse>, AppError> {
    profile.email = profile.email.trim().to_string();
    validate_profile(&profile)?;

    let stored = with_store(&state.profile_store, move |s| s.save(profile)).await?;
    info!(
        "Saved profile (job alerts: {})",
        stored.profile.receive_job_alerts
    );

    Ok(Json(SaveProfileResponse {
        stored,
        notice: Notice::new(
            "Profile Saved Successfully!",
            "Your profile has been saved and will be used to generate ATS-optimized CVs.",
        ),
    }))
}

/// GET /api/v1/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
) -> Result<Json<StoredProfile>, AppError> {
    load_stored_profile(&state.profile_store)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No profile has been saved".to_string()))
}

/// DELETE /api/v1/profile
pub async fn handle_clear_profile(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    with_store(&state.profile_store, |s| s.clear()).await?;
    info!("Cleared stored profile");
    Ok(StatusCode::NO_CONTENT)
}

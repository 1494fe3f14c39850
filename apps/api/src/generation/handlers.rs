//! Axum route handlers for CV generation, preview and download.

use axum::{
    extract::State,
    http::{header, HeaderName},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::atomic::Ordering;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::extract::AppJson;
use crate::generation::progress::InProgress;
use crate::models::document::GeneratedDocument;
use crate::models::notice::Notice;
use crate::profile::handlers::load_stored_profile;
use crate::state::AppState;

/// Filename offered for the plain-text download.
pub const DOWNLOAD_FILENAME: &str = "ats-optimized-cv.txt";

/// A download has no JSON body to carry its notice, so it travels in headers.
pub const NOTICE_TITLE_HEADER: HeaderName = HeaderName::from_static("x-notice-title");
pub const NOTICE_DESCRIPTION_HEADER: HeaderName = HeaderName::from_static("x-notice-description");

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// A missing or `null` job description counts as blank.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub job_description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub document: GeneratedDocument,
    pub notice: Notice,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationStatus {
    pub generating: bool,
    pub has_document: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/cv/generate
///
/// Gate on a non-blank job description and a stored profile, wait the fixed
/// synthesis delay, then synthesize and keep the result as the latest document.
/// The work runs on its own task so a dropped connection does not cut it short.
pub async fn handle_generate(
    State(state): State<AppState>,
    AppJson(request): AppJson<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let job_description = request.job_description.unwrap_or_default();
    if job_description.trim().is_empty() {
        return Err(AppError::JobDescriptionRequired);
    }

    let stored = load_stored_profile(&state.profile_store)
        .await?
        .ok_or(AppError::ProfileRequired)?;

    let in_progress = InProgress::try_begin(&state.generating).ok_or(AppError::Conflict)?;
    info!(
        "Generating CV for job description of {} chars",
        job_description.chars().count()
    );

    let task_state = state.clone();
    let task = tokio::spawn(async move {
        let _in_progress = in_progress;
        tokio::time::sleep(task_state.config.synthesis_delay).await;

        let document = task_state
            .synthesizer
            .synthesize(&stored.profile, &job_description)
            .await?;
        *task_state.latest_document.write().await = Some(document.clone());
        Ok::<_, AppError>(document)
    });

    let document = match task.await {
        Ok(Ok(document)) => document,
        Ok(Err(e)) => return Err(AppError::GenerationFailed(e.to_string())),
        Err(e) => return Err(AppError::GenerationFailed(format!("task aborted: {e}"))),
    };

    info!(
        "Generated CV with {}% match score ({})",
        document.score.value(),
        document.scorer
    );

    let notice = Notice::new(
        "CV Generated Successfully!",
        format!(
            "Your ATS-optimized CV achieved a {}% match score.",
            document.score.value()
        ),
    );

    Ok(Json(GenerateResponse { document, notice }))
}

/// GET /api/v1/cv/latest
pub async fn handle_latest(
    State(state): State<AppState>,
) -> Result<Json<GeneratedDocument>, AppError> {
    state
        .latest_document
        .read()
        .await
        .clone()
        .map(Json)
        .ok_or_else(no_document)
}

/// GET /api/v1/cv/download
///
/// The latest document as a plain-text attachment, byte for byte.
pub async fn handle_download(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let document = state.latest_document.read().await.clone().ok_or_else(|| {
        warn!("Download requested before any CV was generated");
        no_document()
    })?;

    info!("Serving {DOWNLOAD_FILENAME} ({} bytes)", document.content.len());
    let notice = Notice::new(
        "CV Downloaded",
        "Your ATS-optimized CV has been downloaded successfully.",
    );

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{DOWNLOAD_FILENAME}\""),
            ),
            (NOTICE_TITLE_HEADER, notice.title),
            (NOTICE_DESCRIPTION_HEADER, notice.description),
        ],
        document.content,
    ))
}

/// GET /api/v1/cv/status
pub async fn handle_status(State(state): State<AppState>) -> Json<GenerationStatus> {
    Json(GenerationStatus {
        generating: state.generating.load(Ordering::Acquire),
        has_document: state.latest_document.read().await.is_some(),
    })
}

fn no_document() -> AppError {
    AppError::NotFound("No CV has been generated yet".to_string())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

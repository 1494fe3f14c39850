use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::profile::store::StoreError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every response carries a `title` and `message` pair the frontend shows as a
/// transient notification. None of these errors stop the service.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("Job description is required")]
    JobDescriptionRequired,

    #[error("No profile has been saved")]
    ProfileRequired,

    #[error("A CV generation is already in progress")]
    Conflict,

    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, title, message) = match &self {
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                "Not Found",
                msg.clone(),
            ),
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                "Invalid Profile",
                msg.clone(),
            ),
            AppError::InvalidBody(rejection) => (
                StatusCode::BAD_REQUEST,
                "INVALID_REQUEST",
                "Invalid Request",
                rejection.body_text(),
            ),
            AppError::JobDescriptionRequired => (
                StatusCode::BAD_REQUEST,
                "JOB_DESCRIPTION_REQUIRED",
                "Job Description Required",
                "Please paste the job description to generate an ATS-optimized CV.".to_string(),
            ),
            AppError::ProfileRequired => (
                StatusCode::CONFLICT,
                "PROFILE_REQUIRED",
                "Profile Required",
                "Please complete your profile first to generate CVs.".to_string(),
            ),
            AppError::Conflict => (
                StatusCode::CONFLICT,
                "GENERATION_IN_PROGRESS",
                "Generation In Progress",
                "A CV is already being generated. Please wait for it to finish.".to_string(),
            ),
            AppError::GenerationFailed(msg) => {
                tracing::error!("Generation failed: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "GENERATION_FAILED",
                    "Generation Failed",
                    "Unable to generate CV. Please try again.".to_string(),
                )
            }
            AppError::Storage(e) => {
                tracing::error!("Storage error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    "Storage Error",
                    "Your profile could not be read or written".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Internal Error",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "title": title,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

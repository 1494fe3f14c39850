//! Request extractors whose rejections render as `AppError`.

use axum::extract::FromRequest;

use crate::errors::AppError;

/// `axum::Json`, but a body that fails to parse comes back in the usual
/// `{error:{code,title,message}}` shape instead of axum's plain-text 4xx.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

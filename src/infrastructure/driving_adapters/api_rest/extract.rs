//! Request extractors whose rejections use the API error body

use axum::extract::FromRequest;

use crate::shared::errors::ApiError;

/// `axum::Json` whose rejection is an [`ApiError`], so malformed or
/// incomplete bodies get the same JSON error shape as every other failure.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

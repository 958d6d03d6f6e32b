//! Error Types
//!
//! Layered error types with HTTP status code mapping at the edge.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::infrastructure::driving_adapters::api_rest::middleware::request_id::current_request_id;

/// Repository-level errors for data access failures
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The connection could not be established or failed its liveness check.
    /// No statement was issued.
    #[error("Database connection error: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),

    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Data mapping error: {0}")]
    Mapping(String),
}

impl RepositoryError {
    /// Whether the store rejected the statement on a unique constraint
    #[must_use]
    pub fn is_unique_violation(&self) -> bool {
        match self {
            Self::Database(sqlx::Error::Database(db_error)) => db_error.is_unique_violation(),
            _ => false,
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    #[must_use]
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::NotFound(err.to_string()),
            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::Decode(_)
            | sqlx::Error::TypeNotFound { .. } => Self::Mapping(err.to_string()),
            other => Self::Database(other),
        }
    }
}

/// Use case-level errors for application logic failures
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("{resource} '{key}' not found")]
    NotFound { resource: String, key: String },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UseCaseError {
    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Repository(RepositoryError::Connection(_)) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Conflict(_) => "CONFLICT",
            Self::Repository(RepositoryError::Connection(_)) => "DATABASE_UNAVAILABLE",
            Self::Repository(_) => "INTERNAL_ERROR",
        }
    }
}

/// API error response for HTTP responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UseCase(#[from] UseCaseError),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

/// Error response body structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    pub timestamp: String,
}

/// Error detail structure
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-level error for validation errors
#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            ApiError::UseCase(uc_error) => {
                let details = if let UseCaseError::Validation(errors) = uc_error {
                    Some(
                        errors
                            .iter()
                            .map(|e| match e.split_once(": ") {
                                Some((field, message)) => FieldError {
                                    field: field.to_string(),
                                    message: message.to_string(),
                                },
                                None => FieldError {
                                    field: String::new(),
                                    message: e.clone(),
                                },
                            })
                            .collect(),
                    )
                } else {
                    None
                };
                // Store failures are logged here; the client only sees a generic message
                let message = match uc_error {
                    UseCaseError::Repository(err) => {
                        tracing::error!(error = %err, "Repository failure");
                        "A storage error occurred".to_string()
                    }
                    other => other.to_string(),
                };
                (uc_error.status_code(), uc_error.error_code().to_string(), message, details)
            }
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST".to_string(), msg.clone(), None)
            }
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code,
                message,
                details,
            },
            request_id: current_request_id(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::UseCase(UseCaseError::Validation(vec![format!(
            "body: {}",
            rejection.body_text()
        )]))
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        let messages: Vec<String> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    format!(
                        "{}: {}",
                        field,
                        e.message.as_ref().map_or("invalid", |m| m.as_ref())
                    )
                })
            })
            .collect();
        ApiError::UseCase(UseCaseError::Validation(messages))
    }
}

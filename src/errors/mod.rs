//! Error handling module for the QuantumSpace backend.
//!
//! Provides centralized error types with mapping to HTTP status codes and response bodies.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
    pub const DATABASE_ERROR: &str = "DATABASE_ERROR";
    pub const ASSISTANT_ERROR: &str = "ASSISTANT_ERROR";
    pub const BAD_REQUEST: &str = "BAD_REQUEST";
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found
    NotFound(String),
    /// Validation error
    Validation(String),
    /// Database error
    Database(String),
    /// The chat assistant could not produce a reply
    Assistant(String),
    /// Internal server error
    Internal(String),
    /// Bad request
    BadRequest(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Assistant(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => codes::NOT_FOUND,
            AppError::Validation(_) => codes::VALIDATION_ERROR,
            AppError::Database(_) => codes::DATABASE_ERROR,
            AppError::Assistant(_) => codes::ASSISTANT_ERROR,
            AppError::Internal(_) => codes::INTERNAL_ERROR,
            AppError::BadRequest(_) => codes::BAD_REQUEST,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            AppError::NotFound(msg)
            | AppError::Validation(msg)
            | AppError::Database(msg)
            | AppError::Assistant(msg)
            | AppError::Internal(msg)
            | AppError::BadRequest(msg) => msg.clone(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Database error: {:?}", err);
        AppError::Database(format!("Database error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        AppError::BadRequest(format!("JSON error: {}", err))
    }
}

/// Error response body.
///
/// `detail` carries the human-readable message, the same field clients read from
/// any non-2xx response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
    pub code: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        Self {
            detail: error.message(),
            code: error.error_code().to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse::from(&self);
        (status, Json(body)).into_response()
    }
}

//! REST API module.
//!
//! Contains all API routes and handlers following the frontend contract.

mod chat;
mod research;

pub use chat::*;
pub use research::*;

use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

use crate::errors::AppError;

/// Handler result: a JSON body on success, an `AppError` response otherwise.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// GET / - Service banner.
pub async fn root_status() -> Json<Value> {
    Json(json!({
        "message": "QuantumSpace Research Platform API",
        "status": "operational",
    }))
}

/// GET /health - Health check endpoint.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

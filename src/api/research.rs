//! Research database API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;

use super::ApiResult;
use crate::errors::AppError;
use crate::models::{
    CategoriesResponse, DeleteResponse, NewResearch, ResearchRecord, ResearchStats,
};
use crate::AppState;

/// GET /api/research - List all research records.
pub async fn list_research(State(state): State<AppState>) -> ApiResult<Vec<ResearchRecord>> {
    let records = state.repo.list_research().await?;
    Ok(Json(records))
}

/// POST /api/research - Create a new research record.
pub async fn create_research(
    State(state): State<AppState>,
    Json(request): Json<NewResearch>,
) -> ApiResult<ResearchRecord> {
    // Validate required fields
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("Title is required".to_string()));
    }

    let record = state.repo.create_research(&request).await?;
    tracing::info!(id = %record.id, category = %record.category, "Research record created");
    Ok(Json(record))
}

/// DELETE /api/research/{id} - Delete a research record.
pub async fn delete_research(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<DeleteResponse> {
    state.repo.delete_research(&id).await?;
    tracing::info!(id = %id, "Research record deleted");

    Ok(Json(DeleteResponse {
        message: "Research item deleted successfully".to_string(),
        id,
    }))
}

/// GET /api/research/categories - The fixed set of research categories.
pub async fn list_categories() -> Json<CategoriesResponse> {
    Json(CategoriesResponse::all())
}

/// GET /api/research/stats - Record counts overall and per category.
pub async fn research_stats(State(state): State<AppState>) -> ApiResult<ResearchStats> {
    let total_research = state.repo.count_research().await?;
    let categories = state.repo.count_by_category().await?;

    Ok(Json(ResearchStats {
        total_research,
        categories,
        last_updated: Utc::now().to_rfc3339(),
    }))
}

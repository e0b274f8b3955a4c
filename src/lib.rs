//! QuantumSpace research platform.
//!
//! A REST backend (SQLite persistence, LLM-backed chat assistant) and the terminal
//! client that renders the landing content, the chat panel and the research database tab.

pub mod api;
pub mod assistant;
pub mod client;
pub mod config;
pub mod content;
pub mod db;
pub mod errors;
pub mod models;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use assistant::Assistant;
use db::Repository;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub assistant: Arc<dyn Assistant>,
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Research database
        .route(
            "/research",
            get(api::list_research).post(api::create_research),
        )
        .route("/research/categories", get(api::list_categories))
        .route("/research/stats", get(api::research_stats))
        .route("/research/{id}", delete(api::delete_research))
        // Chat
        .route("/chat", post(api::chat));

    Router::new()
        .route("/", get(api::root_status))
        .route("/health", get(api::health_check))
        .nest("/api", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Install the global tracing subscriber. `RUST_LOG` wins over `default_level`.
pub fn init_tracing(default_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(test)]
mod tests;

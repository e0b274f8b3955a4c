//! QuantumSpace Research Platform API server.
//!
//! Serves the research database and chat endpoints over HTTP.

use std::sync::Arc;

use quantumspace::assistant::OpenAiAssistant;
use quantumspace::config::Config;
use quantumspace::db::{self, Repository};
use quantumspace::{create_router, init_tracing, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    init_tracing(&config.log_level);

    tracing::info!("Starting QuantumSpace Research Platform API");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);
    tracing::info!("Assistant model: {}", config.assistant.model);

    if config.assistant.api_key.is_none() {
        tracing::warn!("No LLM API key configured (QS_LLM_API_KEY). Chat requests will fail!");
    }

    // Initialize database
    let pool = db::init_database(&config.db_path).await?;
    let repo = Arc::new(Repository::new(pool));

    if config.seed_samples {
        match repo.seed_samples().await {
            Ok(0) => tracing::info!("Research table already populated, skipping samples"),
            Ok(n) => tracing::info!("Database initialized with {} sample research records", n),
            Err(e) => tracing::error!("Startup error: {}", e),
        }
    }

    let assistant = Arc::new(OpenAiAssistant::new(config.assistant.clone()));

    // Create application state
    let state = AppState { repo, assistant };

    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

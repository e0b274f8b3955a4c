//! Configuration module for the QuantumSpace platform.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Default address of the backend as seen by the client.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Insert the sample research records into an empty database on startup
    pub seed_samples: bool,
    /// Assistant (LLM provider) settings
    pub assistant: AssistantConfig,
}

/// Settings for the OpenAI-compatible chat completions provider.
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();

        let db_path = env::var("QS_DB_PATH")
            .unwrap_or_else(|_| "./data/quantumspace.sqlite".to_string())
            .into();

        let bind_raw = env::var("QS_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8001".to_string());
        let bind_addr = bind_raw
            .parse()
            .map_err(|e| format!("Invalid QS_BIND_ADDR {:?}: {}", bind_raw, e))?;

        let log_level = log_level_from_env();

        let seed_samples = env::var("QS_SEED_SAMPLES")
            .map(|v| !matches!(v.to_ascii_lowercase().as_str(), "0" | "false" | "no" | "off"))
            .unwrap_or(true);

        let defaults = AssistantConfig::default();
        let assistant = AssistantConfig {
            api_key: env::var("QS_LLM_API_KEY").ok().filter(|k| !k.trim().is_empty()),
            base_url: env::var("QS_LLM_BASE_URL").unwrap_or(defaults.base_url),
            model: env::var("QS_LLM_MODEL").unwrap_or(defaults.model),
        };

        Ok(Self {
            db_path,
            bind_addr,
            log_level,
            seed_samples,
            assistant,
        })
    }
}

/// Client configuration: where the backend lives.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub backend_url: String,
    pub log_level: String,
}

impl ClientConfig {
    /// Load client configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let backend_url = env::var("QS_BACKEND_URL")
            .ok()
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        Self {
            backend_url,
            log_level: log_level_from_env(),
        }
    }
}

fn log_level_from_env() -> String {
    env::var("QS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string())
}

//! Chat assistant backed by an OpenAI-compatible chat completions API.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::AssistantConfig;
use crate::errors::AppError;

/// System prompt framing the assistant's expertise.
pub const SYSTEM_PROMPT: &str = "You are an advanced AI assistant specialized in space research, quantum theory, and AI programming. You have expertise in:

1. Space Research & Technology:
   - Satellite technology and space missions
   - Astronomical data analysis
   - Space exploration programs
   - Rocket technology and propulsion systems
   - Space station operations

2. Quantum Theory & Computing:
   - Quantum mechanics principles
   - Quantum computing algorithms
   - Quantum entanglement and superposition
   - Quantum cryptography
   - Quantum machine learning

3. AI Programming & Database Systems:
   - Machine learning models for research
   - Data analysis and visualization
   - Database management for research data
   - Predictive analytics for space missions

Provide clear, educational, and engaging explanations suitable for researchers, investors, and the general public. Use analogies when helpful and always maintain scientific accuracy.";

/// Produces a reply to a single user message.
#[async_trait]
pub trait Assistant: Send + Sync {
    async fn reply(&self, message: &str) -> Result<String, AppError>;
}

/// Assistant calling `{base_url}/chat/completions`.
pub struct OpenAiAssistant {
    client: Client,
    config: AssistantConfig,
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<CompletionMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct CompletionMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionContent,
}

#[derive(Debug, Deserialize)]
struct CompletionContent {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiAssistant {
    pub fn new(config: AssistantConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl Assistant for OpenAiAssistant {
    async fn reply(&self, message: &str) -> Result<String, AppError> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return Err(AppError::Assistant(
                "Error processing chat message: no LLM API key configured".to_string(),
            ));
        };

        let url = format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'));
        let body = CompletionRequest {
            model: &self.config.model,
            messages: vec![
                CompletionMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                CompletionMessage {
                    role: "user",
                    content: message,
                },
            ],
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Chat error: {}", e);
                AppError::Assistant(format!("Error processing chat message: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            tracing::error!("Chat provider returned {}: {}", status, text);
            return Err(AppError::Assistant(format!(
                "Error processing chat message: provider returned {}",
                status
            )));
        }

        let completion: CompletionResponse = response.json().await.map_err(|e| {
            tracing::error!("Chat provider response could not be decoded: {}", e);
            AppError::Assistant(format!("Error processing chat message: {}", e))
        })?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                AppError::Assistant("Error processing chat message: empty completion".to_string())
            })
    }
}

//! HTTP client for the QuantumSpace REST API.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::errors::ErrorResponse;
use crate::models::{ChatRequest, ChatResponse, NewResearch, ResearchRecord};

/// Errors from a single backend call.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error {status}: {detail}")]
    Status { status: u16, detail: String },

    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client bound to one backend base address. No retries, transport-default timeouts.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET /api/research
    pub async fn list_records(&self) -> Result<Vec<ResearchRecord>, ClientError> {
        let response = self.client.get(self.url("/api/research")).send().await?;
        decode(response).await
    }

    /// POST /api/research
    pub async fn create_record(&self, draft: &NewResearch) -> Result<ResearchRecord, ClientError> {
        let response = self
            .client
            .post(self.url("/api/research"))
            .json(draft)
            .send()
            .await?;
        decode(response).await
    }

    /// DELETE /api/research/{id}; any response body is ignored.
    ///
    /// The id is sent as one encoded path segment, so `?`, `#` and `/` stay part of it.
    pub async fn delete_record(&self, id: &str) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(self.url(&record_path(id)))
            .send()
            .await?;
        check_status(response).await.map(|_| ())
    }

    /// POST /api/chat, returning the assistant's reply text.
    pub async fn send_chat(&self, message: &str) -> Result<String, ClientError> {
        let response = self
            .client
            .post(self.url("/api/chat"))
            .json(&ChatRequest {
                message: message.to_string(),
            })
            .send()
            .await?;
        let body: ChatResponse = decode(response).await?;
        Ok(body.response)
    }
}

fn record_path(id: &str) -> String {
    format!("/api/research/{}", urlencoding::encode(id))
}

async fn check_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<ErrorResponse>(&text)
        .map(|body| body.detail)
        .unwrap_or(text);

    Err(ClientError::Status {
        status: status.as_u16(),
        detail,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let response = check_status(response).await?;
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

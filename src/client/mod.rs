//! Terminal client for the QuantumSpace backend.
//!
//! Holds the ephemeral UI state (chat transcript, research list, draft) and the HTTP
//! calls that update it. Every network failure is caught and logged here; nothing
//! propagates past a panel.

mod api;
pub mod chat;
pub mod research;

pub use api::{ApiClient, ClientError};
pub use chat::ChatPanel;
pub use research::{DraftResearch, ResearchPanel};

use async_trait::async_trait;

use crate::models::{NewResearch, ResearchRecord};

/// The four backend calls the panels depend on.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn list_records(&self) -> Result<Vec<ResearchRecord>, ClientError>;
    async fn create_record(&self, draft: &NewResearch) -> Result<ResearchRecord, ClientError>;
    async fn delete_record(&self, id: &str) -> Result<(), ClientError>;
    async fn send_chat(&self, message: &str) -> Result<String, ClientError>;
}

#[async_trait]
impl Backend for ApiClient {
    async fn list_records(&self) -> Result<Vec<ResearchRecord>, ClientError> {
        ApiClient::list_records(self).await
    }

    async fn create_record(&self, draft: &NewResearch) -> Result<ResearchRecord, ClientError> {
        ApiClient::create_record(self, draft).await
    }

    async fn delete_record(&self, id: &str) -> Result<(), ClientError> {
        ApiClient::delete_record(self, id).await
    }

    async fn send_chat(&self, message: &str) -> Result<String, ClientError> {
        ApiClient::send_chat(self, message).await
    }
}

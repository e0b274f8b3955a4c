//! Research database tab: the cached record list and the draft form.

use crate::models::{NewResearch, ResearchRecord};

use super::{Backend, ClientError};

/// The form buffer for a new record.
pub type DraftResearch = NewResearch;

/// Research tab state.
///
/// `records` only ever holds the body of the last listing that completed
/// successfully; mutations never edit it in place.
#[derive(Debug, Default)]
pub struct ResearchPanel {
    records: Vec<ResearchRecord>,
    draft: DraftResearch,
}

impl ResearchPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[ResearchRecord] {
        &self.records
    }

    pub fn draft(&self) -> &DraftResearch {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut DraftResearch {
        &mut self.draft
    }

    /// Apply a completed listing. Success replaces the cache wholesale; failure leaves it.
    ///
    /// Completions are applied in arrival order, so the last one to arrive wins.
    pub fn apply_listing(&mut self, result: Result<Vec<ResearchRecord>, ClientError>) -> bool {
        match result {
            Ok(records) => {
                tracing::debug!("Fetched {} research records", records.len());
                self.records = records;
                true
            }
            Err(e) => {
                tracing::warn!("Error fetching research data: {}", e);
                false
            }
        }
    }

    /// Re-fetch the full list from the backend.
    pub async fn list_records(&mut self, backend: &dyn Backend) -> bool {
        let result = backend.list_records().await;
        self.apply_listing(result)
    }

    /// Submit the draft. On success the draft resets and the list is re-fetched;
    /// on failure the draft is kept as entered.
    pub async fn create_record(&mut self, backend: &dyn Backend) -> bool {
        match backend.create_record(&self.draft).await {
            Ok(record) => {
                tracing::debug!("Created research record {}", record.id);
                self.draft = DraftResearch::default();
                self.list_records(backend).await;
                true
            }
            Err(e) => {
                tracing::warn!("Error adding research: {}", e);
                false
            }
        }
    }

    /// Delete one record by id, then re-fetch the list on success.
    pub async fn delete_record(&mut self, backend: &dyn Backend, id: &str) -> bool {
        match backend.delete_record(id).await {
            Ok(()) => {
                self.list_records(backend).await;
                true
            }
            Err(e) => {
                tracing::warn!("Error deleting research {}: {}", id, e);
                false
            }
        }
    }
}

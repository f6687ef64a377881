use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use watchlist_models::CatalogEntry;

use crate::error::CatalogError;
use crate::traits::{CatalogSearch, CatalogSource};

/// Message OMDb returns when a search has no matches.
const NOT_FOUND_MESSAGE: &str = "Movie not found!";

/// In-memory catalog with controllable behavior:
/// - case-insensitive title matching over added entries
/// - configurable miss message (or none)
/// - one-shot error injection
/// - recorded queries for assertions
#[derive(Debug, Clone)]
pub struct MockCatalog {
    entries: Arc<RwLock<Vec<CatalogEntry>>>,
    miss_message: Arc<RwLock<Option<String>>>,
    queries: Arc<RwLock<Vec<String>>>,
    next_error: Arc<RwLock<Option<CatalogError>>>,
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCatalog {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
            miss_message: Arc::new(RwLock::new(Some(NOT_FOUND_MESSAGE.to_string()))),
            queries: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
        }
    }

    pub async fn add_entry(&self, entry: CatalogEntry) {
        self.entries.write().await.push(entry);
    }

    pub async fn set_entries(&self, entries: Vec<CatalogEntry>) {
        *self.entries.write().await = entries;
    }

    /// Message reported on a miss; `None` mimics a bare `"Response": "False"`.
    pub async fn set_miss_message(&self, message: Option<String>) {
        *self.miss_message.write().await = message;
    }

    pub async fn set_next_error(&self, error: CatalogError) {
        *self.next_error.write().await = Some(error);
    }

    pub async fn recorded_queries(&self) -> Vec<String> {
        self.queries.read().await.clone()
    }

    pub async fn query_count(&self) -> usize {
        self.queries.read().await.len()
    }
}

#[async_trait]
impl CatalogSource for MockCatalog {
    fn source_name(&self) -> &str {
        "mock"
    }

    async fn search(&self, query: &str) -> Result<CatalogSearch, CatalogError> {
        self.queries.write().await.push(query.to_string());

        if let Some(err) = self.next_error.write().await.take() {
            return Err(err);
        }

        let query_lower = query.to_lowercase();
        let hits: Vec<CatalogEntry> = self
            .entries
            .read()
            .await
            .iter()
            .filter(|e| e.title.to_lowercase().contains(&query_lower))
            .cloned()
            .collect();

        if hits.is_empty() {
            let message = self.miss_message.read().await.clone();
            return Ok(CatalogSearch::Miss { message });
        }

        Ok(CatalogSearch::Hits(hits))
    }
}

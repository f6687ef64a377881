//! Search controller: one catalog lookup per submitted query.
//!
//! The controller keeps the last result list and the last surfaced error so a
//! view can render them between searches. It never caches queries.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{info, warn};
use watchlist_models::CatalogEntry;
use watchlist_sources::{CatalogSearch, CatalogSource};

use crate::error::SearchError;

/// Shared "search in flight" indicator that a UI can poll.
#[derive(Debug, Clone, Default)]
pub struct LoadingFlag(Arc<AtomicBool>);

impl LoadingFlag {
    pub fn is_loading(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    fn begin(&self) -> LoadingGuard<'_> {
        self.0.store(true, Ordering::SeqCst);
        LoadingGuard(&self.0)
    }
}

/// Clears the flag when dropped, including when the search future is dropped early.
struct LoadingGuard<'a>(&'a AtomicBool);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

pub struct SearchController {
    source: Arc<dyn CatalogSource>,
    results: Vec<CatalogEntry>,
    error: Option<SearchError>,
    loading: LoadingFlag,
}

impl SearchController {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self {
            source,
            results: Vec::new(),
            error: None,
            loading: LoadingFlag::default(),
        }
    }

    /// Run a search. A blank query returns `EmptyQuery` without touching any
    /// state or issuing a request. On failure the result list is emptied and
    /// the error kept until the next search.
    pub async fn search(&mut self, query: &str) -> Result<&[CatalogEntry], SearchError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        self.error = None;
        let outcome = {
            let _guard = self.loading.begin();
            self.source.search(query).await
        };

        let result = match outcome {
            Ok(CatalogSearch::Hits(entries)) => {
                info!(
                    operation = "search",
                    source = self.source.source_name(),
                    query = query,
                    results = entries.len(),
                    "Search completed"
                );
                Ok(entries)
            }
            Ok(CatalogSearch::Miss { message }) => {
                info!(
                    operation = "search",
                    source = self.source.source_name(),
                    query = query,
                    message = message.as_deref().unwrap_or(""),
                    "Search returned no results"
                );
                Err(SearchError::not_found(message))
            }
            Err(e) => {
                warn!(
                    operation = "search",
                    source = self.source.source_name(),
                    query = query,
                    error = %e,
                    "Search request failed"
                );
                Err(SearchError::NetworkFailure)
            }
        };

        match result {
            Ok(entries) => {
                self.results = entries;
                Ok(&self.results)
            }
            Err(err) => {
                self.results.clear();
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    pub fn results(&self) -> &[CatalogEntry] {
        &self.results
    }

    pub fn result(&self, imdb_id: &str) -> Option<&CatalogEntry> {
        self.results.iter().find(|entry| entry.imdb_id == imdb_id)
    }

    pub fn error(&self) -> Option<&SearchError> {
        self.error.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    /// Handle for observers that outlive a borrow of the controller.
    pub fn loading_flag(&self) -> LoadingFlag {
        self.loading.clone()
    }
}

//! Interactive session state: the active view, the search controller, the
//! watchlist and the rate/review dialog.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;
use watchlist_models::{CatalogEntry, StarRating, WatchlistItem, WatchlistStats};
use watchlist_sources::CatalogSource;

use crate::error::SearchError;
use crate::search::{LoadingFlag, SearchController};
use crate::store::WatchlistStore;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Search,
    Unwatched,
    Watched,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Search, ViewMode::Unwatched, ViewMode::Watched];

    /// Tab label, with counts for the watchlist views.
    pub fn label(&self, stats: &WatchlistStats) -> String {
        match self {
            ViewMode::Search => "Search Results".to_string(),
            ViewMode::Unwatched => format!("To Watch ({})", stats.unwatched),
            ViewMode::Watched => format!("Watched ({})", stats.watched),
        }
    }

    pub fn empty_message(&self) -> &'static str {
        match self {
            ViewMode::Search => "Search for movies to get started!",
            ViewMode::Unwatched => "No movies in your watchlist yet!",
            ViewMode::Watched => "You haven't watched any movies yet!",
        }
    }
}

/// Rating and review being edited for one watchlist item.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewDraft {
    pub imdb_id: String,
    pub title: String,
    pub rating: StarRating,
    pub review: String,
}

pub struct Session {
    search: SearchController,
    store: WatchlistStore,
    view: ViewMode,
    review: Option<ReviewDraft>,
}

impl Session {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self::with_store(source, WatchlistStore::new())
    }

    pub fn with_store(source: Arc<dyn CatalogSource>, store: WatchlistStore) -> Self {
        Self {
            search: SearchController::new(source),
            store,
            view: ViewMode::default(),
            review: None,
        }
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    /// Search the catalog; a successful search brings the results view forward.
    pub async fn submit_search(&mut self, query: &str) -> Result<&[CatalogEntry], SearchError> {
        let outcome = self.search.search(query).await.map(|results| results.len());
        match outcome {
            Ok(count) => {
                debug!(results = count, "Switching to search results");
                self.view = ViewMode::Search;
                Ok(self.search.results())
            }
            Err(err) => Err(err),
        }
    }

    pub fn results(&self) -> &[CatalogEntry] {
        self.search.results()
    }

    pub fn error(&self) -> Option<&SearchError> {
        self.search.error()
    }

    pub fn is_loading(&self) -> bool {
        self.search.is_loading()
    }

    pub fn loading_flag(&self) -> LoadingFlag {
        self.search.loading_flag()
    }

    pub fn store(&self) -> &WatchlistStore {
        &self.store
    }

    pub fn stats(&self) -> WatchlistStats {
        self.store.stats()
    }

    pub fn in_watchlist(&self, imdb_id: &str) -> bool {
        self.store.contains(imdb_id)
    }

    /// Add one of the current search results to the watchlist.
    pub fn add_result(&mut self, imdb_id: &str) -> bool {
        match self.search.result(imdb_id) {
            Some(entry) => self.store.add(entry.clone()),
            None => false,
        }
    }

    pub fn remove(&mut self, imdb_id: &str) -> bool {
        if self.review.as_ref().is_some_and(|draft| draft.imdb_id == imdb_id) {
            self.review = None;
        }
        self.store.remove(imdb_id)
    }

    pub fn toggle_watched(&mut self, imdb_id: &str) -> Option<bool> {
        self.store.toggle_watched(imdb_id)
    }

    /// Items for the active view. The search view lists no watchlist items.
    pub fn view_items(&self) -> Vec<&WatchlistItem> {
        match self.view {
            ViewMode::Search => Vec::new(),
            ViewMode::Unwatched => self.store.unwatched(),
            ViewMode::Watched => self.store.watched(),
        }
    }

    /// Whether the active view should show its empty-state message.
    pub fn shows_empty_state(&self) -> bool {
        match self.view {
            ViewMode::Search => {
                self.search.results().is_empty() && !self.search.is_loading() && self.search.error().is_none()
            }
            ViewMode::Unwatched => self.store.unwatched().is_empty(),
            ViewMode::Watched => self.store.watched().is_empty(),
        }
    }

    /// Open the rate/review dialog for an item, seeded with its current values.
    pub fn open_review(&mut self, imdb_id: &str) -> Option<&ReviewDraft> {
        let item = self.store.get(imdb_id)?;
        self.review = Some(ReviewDraft {
            imdb_id: item.imdb_id().to_string(),
            title: item.title().to_string(),
            rating: item.rating,
            review: item.review.clone(),
        });
        self.review.as_ref()
    }

    pub fn review_draft(&self) -> Option<&ReviewDraft> {
        self.review.as_ref()
    }

    pub fn set_draft_rating(&mut self, rating: StarRating) {
        if let Some(draft) = self.review.as_mut() {
            draft.rating = rating;
        }
    }

    pub fn set_draft_review(&mut self, review: impl Into<String>) {
        if let Some(draft) = self.review.as_mut() {
            draft.review = review.into();
        }
    }

    /// Apply the open draft and close the dialog. Saving marks the item watched.
    pub fn save_review(&mut self) -> bool {
        let Some(draft) = self.review.take() else {
            return false;
        };
        self.store.save_review(&draft.imdb_id, draft.rating, draft.review)
    }

    pub fn cancel_review(&mut self) {
        self.review = None;
    }
}

#[cfg(test)]
mod tests;

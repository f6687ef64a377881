use chrono::Utc;
use tracing::debug;
use watchlist_models::{CatalogEntry, StarRating, WatchlistItem, WatchlistStats};

/// The user's watchlist, owned by the session for the life of the process.
///
/// Mutations never fail: adding a duplicate or addressing an unknown id is a
/// silent no-op. Derived views are recomputed on every call.
#[derive(Debug, Default, Clone)]
pub struct WatchlistStore {
    items: Vec<WatchlistItem>,
}

impl WatchlistStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy a search result into the watchlist. Returns false if it was already there.
    pub fn add(&mut self, entry: CatalogEntry) -> bool {
        if self.contains(&entry.imdb_id) {
            debug!(imdb_id = %entry.imdb_id, "Already in watchlist, skipping add");
            return false;
        }

        debug!(imdb_id = %entry.imdb_id, title = %entry.title, "Adding to watchlist");
        self.items.push(WatchlistItem::from_entry(entry, Utc::now()));
        true
    }

    pub fn remove(&mut self, imdb_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.imdb_id() != imdb_id);
        let removed = self.items.len() != before;
        if removed {
            debug!(imdb_id = imdb_id, "Removed from watchlist");
        }
        removed
    }

    /// Flip the watched flag. Rating and review are left as they are.
    /// Returns the new flag, or `None` if the id is unknown.
    pub fn toggle_watched(&mut self, imdb_id: &str) -> Option<bool> {
        let item = self.get_mut(imdb_id)?;
        item.watched = !item.watched;
        debug!(imdb_id = imdb_id, watched = item.watched, "Toggled watched");
        Some(item.watched)
    }

    /// Store a rating and review. Saving a review always marks the item watched.
    pub fn save_review(&mut self, imdb_id: &str, rating: StarRating, review: impl Into<String>) -> bool {
        let Some(item) = self.get_mut(imdb_id) else {
            return false;
        };
        item.rating = rating;
        item.review = review.into();
        item.watched = true;
        debug!(imdb_id = imdb_id, rating = rating.value(), "Saved review");
        true
    }

    pub fn contains(&self, imdb_id: &str) -> bool {
        self.items.iter().any(|item| item.imdb_id() == imdb_id)
    }

    pub fn get(&self, imdb_id: &str) -> Option<&WatchlistItem> {
        self.items.iter().find(|item| item.imdb_id() == imdb_id)
    }

    fn get_mut(&mut self, imdb_id: &str) -> Option<&mut WatchlistItem> {
        self.items.iter_mut().find(|item| item.imdb_id() == imdb_id)
    }

    /// All items in insertion order.
    pub fn items(&self) -> &[WatchlistItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn unwatched(&self) -> Vec<&WatchlistItem> {
        self.items.iter().filter(|item| !item.watched).collect()
    }

    pub fn watched(&self) -> Vec<&WatchlistItem> {
        self.items.iter().filter(|item| item.watched).collect()
    }

    /// Mean rating over watched items that have a rating, 0.0 if there are none.
    pub fn average_rating(&self) -> f64 {
        let (sum, count) = self
            .items
            .iter()
            .filter(|item| item.watched && item.rating.is_rated())
            .fold((0u32, 0u32), |(sum, count), item| {
                (sum + u32::from(item.rating.value()), count + 1)
            });

        if count == 0 {
            0.0
        } else {
            f64::from(sum) / f64::from(count)
        }
    }

    pub fn stats(&self) -> WatchlistStats {
        let watched = self.items.iter().filter(|item| item.watched).count();
        WatchlistStats {
            total: self.items.len(),
            unwatched: self.items.len() - watched,
            watched,
            average_rating: self.average_rating(),
        }
    }
}

#[cfg(test)]
mod tests;

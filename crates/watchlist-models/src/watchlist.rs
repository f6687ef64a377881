use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::catalog_entry::CatalogEntry;
use crate::rating::StarRating;
use crate::status::WatchState;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchlistItem {
    #[serde(flatten)]
    pub entry: CatalogEntry,
    pub watched: bool,
    pub rating: StarRating,
    pub review: String,
    pub added_at: DateTime<Utc>,
}

impl WatchlistItem {
    /// Fresh, unwatched and unrated item copied from a search result.
    pub fn from_entry(entry: CatalogEntry, added_at: DateTime<Utc>) -> Self {
        Self {
            entry,
            watched: false,
            rating: StarRating::UNRATED,
            review: String::new(),
            added_at,
        }
    }

    pub fn imdb_id(&self) -> &str {
        &self.entry.imdb_id
    }

    pub fn title(&self) -> &str {
        &self.entry.title
    }

    pub fn year(&self) -> &str {
        &self.entry.year
    }

    pub fn state(&self) -> WatchState {
        match (self.watched, self.rating.is_rated()) {
            (false, _) => WatchState::Unwatched,
            (true, false) => WatchState::WatchedUnrated,
            (true, true) => WatchState::WatchedRated,
        }
    }

    /// Rating worth showing: only for watched items that were actually rated.
    pub fn visible_rating(&self) -> Option<StarRating> {
        (self.watched && self.rating.is_rated()).then_some(self.rating)
    }

    pub fn visible_review(&self) -> Option<&str> {
        (!self.review.is_empty()).then_some(self.review.as_str())
    }

    pub fn rate_action_label(&self) -> &'static str {
        if self.rating.is_rated() {
            "Edit"
        } else {
            "Rate"
        }
    }

    pub fn toggle_action_label(&self) -> &'static str {
        if self.watched {
            "Unwatch"
        } else {
            "Watched"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> WatchlistItem {
        WatchlistItem::from_entry(CatalogEntry::new("tt0133093", "The Matrix", "1999"), Utc::now())
    }

    #[test]
    fn test_new_item_defaults() {
        let item = item();
        assert!(!item.watched);
        assert_eq!(item.rating, StarRating::UNRATED);
        assert!(item.review.is_empty());
        assert_eq!(item.state(), WatchState::Unwatched);
        assert_eq!(item.rate_action_label(), "Rate");
        assert_eq!(item.toggle_action_label(), "Watched");
    }

    #[test]
    fn test_stale_rating_is_hidden_when_unwatched() {
        let mut item = item();
        item.rating = StarRating::new(4).unwrap();
        item.review = "Still holds up".to_string();

        assert_eq!(item.state(), WatchState::Unwatched);
        assert_eq!(item.visible_rating(), None);
        assert_eq!(item.visible_review(), Some("Still holds up"));
        assert_eq!(item.rate_action_label(), "Edit");

        item.watched = true;
        assert_eq!(item.state(), WatchState::WatchedRated);
        assert_eq!(item.visible_rating(), Some(StarRating::new(4).unwrap()));
        assert_eq!(item.toggle_action_label(), "Unwatch");
    }

    #[test]
    fn test_serializes_flat() {
        let json = serde_json::to_value(item()).unwrap();
        assert_eq!(json["imdb_id"], "tt0133093");
        assert_eq!(json["rating"], 0);
        assert_eq!(json["watched"], false);
    }
}

use serde::{Deserialize, Serialize};

/// Aggregate counters shown above the watchlist views.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WatchlistStats {
    pub total: usize,
    pub unwatched: usize,
    pub watched: usize,
    /// Mean rating over watched, rated items; 0.0 when there are none.
    pub average_rating: f64,
}

impl WatchlistStats {
    /// Average rating with one decimal, e.g. "4.0".
    pub fn average_rating_display(&self) -> String {
        format!("{:.1}", self.average_rating)
    }
}

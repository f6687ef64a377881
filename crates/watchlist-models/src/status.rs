use serde::{Deserialize, Serialize};

/// Where a watchlist item sits in its watched/rated lifecycle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum WatchState {
    /// Added but not watched yet. Rating and review may still hold values
    /// from before the item was un-watched; they are treated as stale.
    Unwatched,
    WatchedUnrated,
    WatchedRated,
}

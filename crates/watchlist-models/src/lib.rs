pub mod catalog_entry;
pub mod media;
pub mod rating;
pub mod stats;
pub mod status;
pub mod watchlist;

pub use catalog_entry::{CatalogEntry, NO_POSTER};
pub use media::MediaType;
pub use rating::{RatingError, StarRating};
pub use stats::WatchlistStats;
pub use status::WatchState;
pub use watchlist::WatchlistItem;

pub mod error;
pub mod search;
pub mod session;
pub mod store;

pub use error::SearchError;
pub use search::{LoadingFlag, SearchController};
pub use session::{ReviewDraft, Session, ViewMode};
pub use store::WatchlistStore;

use thiserror::Error;

pub const DEFAULT_NOT_FOUND_MESSAGE: &str = "No movies found";
pub const NETWORK_FAILURE_MESSAGE: &str = "Failed to fetch movies. Please try again.";

/// Why a search produced no results. Display text is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Blank query; rejected before any request and never shown.
    #[error("empty search query")]
    EmptyQuery,

    /// The catalog answered without success.
    #[error("{0}")]
    NotFound(String),

    /// Transport, status or payload failure talking to the catalog.
    #[error("{}", NETWORK_FAILURE_MESSAGE)]
    NetworkFailure,
}

impl SearchError {
    pub fn not_found(message: Option<String>) -> Self {
        SearchError::NotFound(message.unwrap_or_else(|| DEFAULT_NOT_FOUND_MESSAGE.to_string()))
    }

    /// Whether the UI should display this error.
    pub fn is_surfaced(&self) -> bool {
        !matches!(self, SearchError::EmptyQuery)
    }
}

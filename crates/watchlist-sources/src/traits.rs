use async_trait::async_trait;
use watchlist_models::CatalogEntry;
use crate::error::CatalogError;

/// Outcome of a catalog query that reached the service.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogSearch {
    /// The service reported success. Order is the service's own.
    Hits(Vec<CatalogEntry>),
    /// The service answered but reported no success, optionally with a reason.
    Miss { message: Option<String> },
}

#[async_trait]
pub trait CatalogSource: Send + Sync {
    fn source_name(&self) -> &str;

    /// Search titles by free text. `query` is already trimmed and non-empty.
    async fn search(&self, query: &str) -> Result<CatalogSearch, CatalogError>;
}
